//! # awsbind-guardduty – Amazon GuardDuty client
//!
//! Blocking, strongly typed bindings for every GuardDuty operation over the
//! REST-JSON protocol. Requests are plain structs with fluent builders; each
//! call returns the typed result or an [`SdkError`] carrying either a
//! client-side failure or a [`GuardDutyError`].
//!
//! ```no_run
//! use awsbind_guardduty::{GuardDutyClient, ListDetectorsRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GuardDutyClient::from_env()?;
//! let detectors = client.list_detectors(&ListDetectorsRequest::default())?;
//! for id in detectors.detector_ids.unwrap_or_default() {
//!     println!("{id}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module              | Operations                                        |
//! |---------------------|---------------------------------------------------|
//! | `detectors`         | Create / Get / List / Update / Delete detector    |
//! | `findings`          | Get / List / Archive / Feedback / Statistics      |
//! | `filters`           | Saved finding filters                             |
//! | `ip_sets`           | Trusted IP lists                                  |
//! | `threat_intel_sets` | Threat lists                                      |
//! | `members`           | Member accounts and invitations                   |
//! | `organization`      | Delegated administrator and auto-enable           |
//! | `publishing`        | Finding export destinations                       |
//! | `tags`              | Resource tagging                                  |

pub mod client;
pub mod error;
pub mod types;

pub mod detectors;
pub mod filters;
pub mod findings;
pub mod ip_sets;
pub mod members;
pub mod organization;
pub mod publishing;
pub mod tags;
pub mod threat_intel_sets;

pub use awsbind_core::{CallOptions, ClientConfig, Credentials, Region, SdkError};
pub use client::{GuardDutyClient, GuardDutyClientBuilder};
pub use error::GuardDutyError;

pub use detectors::*;
pub use filters::*;
pub use findings::*;
pub use ip_sets::*;
pub use members::*;
pub use organization::*;
pub use publishing::*;
pub use tags::*;
pub use threat_intel_sets::*;
