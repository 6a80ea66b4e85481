//! # awsbind – blocking AWS service clients
//!
//! Facade over the workspace crates:
//!
//! | Feature        | Crate                  | Client                 |
//! |----------------|------------------------|------------------------|
//! | (always)       | `awsbind-core`         | shared request pipeline|
//! | `guardduty`    | `awsbind-guardduty`    | [`GuardDutyClient`]    |
//! | `costexplorer` | `awsbind-costexplorer` | [`CostExplorerClient`] |
//!
//! ```no_run
//! use awsbind::guardduty::{GuardDutyClient, ListDetectorsRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! awsbind::logging::init_from_env()?;
//! let client = GuardDutyClient::from_env()?;
//! let out = client.list_detectors(&ListDetectorsRequest::default())?;
//! println!("{:?}", out.detector_ids);
//! # Ok(())
//! # }
//! ```

pub mod logging;

pub use awsbind_core::{
    CallOptions, ClientConfig, ClientError, Credentials, ProvideCredentials, ProvideErrorMetadata,
    Region, SdkError, ServiceError,
};

#[cfg(feature = "guardduty")]
pub use awsbind_guardduty as guardduty;
#[cfg(feature = "guardduty")]
pub use awsbind_guardduty::{GuardDutyClient, GuardDutyError};

#[cfg(feature = "costexplorer")]
pub use awsbind_costexplorer as costexplorer;
#[cfg(feature = "costexplorer")]
pub use awsbind_costexplorer::{CostExplorerClient, CostExplorerError};
