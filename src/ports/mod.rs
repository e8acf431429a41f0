mod config_store;
mod dns_provider;
mod git;
mod hosting_platform;
mod prompter;

pub use config_store::ConfigStore;
pub use dns_provider::DnsProvider;
pub use git::Git;
pub use hosting_platform::{CreatedApp, HostingPlatform, PipelineCoupling, REVIEW_STAGE};
pub use prompter::Prompter;
