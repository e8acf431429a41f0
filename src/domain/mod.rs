pub mod app_name;
pub mod config;
pub mod dns;
pub mod error;
pub mod outcome;
pub mod review_app;

pub use app_name::AppName;
pub use config::{CloudflareSettings, CloudflareZone, HerokuSettings, ReviewConfig, split_list};
pub use dns::DnsRecord;
pub use error::AppError;
pub use outcome::{Outcome, Step, StepRecord, StepStatus};
pub use review_app::{GitHubRepo, ReviewApp, Target};
