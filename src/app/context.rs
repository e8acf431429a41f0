use crate::domain::ReviewConfig;
use crate::ports::{DnsProvider, Git, HostingPlatform};

/// Application context holding dependencies for provisioning.
pub struct AppContext<G: Git, H: HostingPlatform, D: DnsProvider> {
    config: ReviewConfig,
    git: G,
    platform: H,
    dns: D,
}

impl<G: Git, H: HostingPlatform, D: DnsProvider> AppContext<G, H, D> {
    /// Create a new application context.
    pub fn new(config: ReviewConfig, git: G, platform: H, dns: D) -> Self {
        Self { config, git, platform, dns }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Get a reference to the working copy.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the hosting platform client.
    pub fn platform(&self) -> &H {
        &self.platform
    }

    /// Get a reference to the DNS provider client.
    pub fn dns(&self) -> &D {
        &self.dns
    }
}
