//! # awsbind-costexplorer – AWS Cost Explorer client
//!
//! Blocking, strongly typed bindings for every Cost Explorer operation over
//! the AWS JSON 1.1 protocol: cost and usage queries, forecasts, cost
//! categories, reservation and Savings Plans reports, and rightsizing.
//!
//! ```no_run
//! use awsbind_costexplorer::types::{DateInterval, Granularity};
//! use awsbind_costexplorer::{CostExplorerClient, GetCostAndUsageRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CostExplorerClient::from_env()?;
//! let out = client.get_cost_and_usage(
//!     &GetCostAndUsageRequest::default()
//!         .time_period(DateInterval::default().start("2020-01-01").end("2020-02-01"))
//!         .granularity(Granularity::Monthly)
//!         .metrics(["UnblendedCost"]),
//! )?;
//! println!("{} periods", out.results_by_time.map_or(0, |r| r.len()));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub mod cost_categories;
pub mod cost_usage;
pub mod reservations;
pub mod rightsizing;
pub mod savings_plans;

pub use awsbind_core::{CallOptions, ClientConfig, Credentials, Region, SdkError};
pub use client::{CostExplorerClient, CostExplorerClientBuilder, HOME_REGION};
pub use error::CostExplorerError;

pub use cost_categories::*;
pub use cost_usage::*;
pub use reservations::*;
pub use rightsizing::*;
pub use savings_plans::*;

/// `X-Amz-Target` prefix of every operation.
pub(crate) const TARGET_PREFIX: &str = "AWSInsightsIndexService";
pub(crate) const JSON_VERSION: &str = "1.1";
