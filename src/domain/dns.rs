use serde::Serialize;

use super::AppName;
use super::config::CloudflareZone;

/// TTL value Cloudflare interprets as "automatic".
pub const AUTOMATIC_TTL: u32 = 1;

/// A DNS record as sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl DnsRecord {
    /// Proxied CNAME pointing `{app}.{domain}` at the app's web host.
    pub fn cname(app: &AppName, app_url: &str, zone: &CloudflareZone) -> Self {
        Self {
            name: subdomain(app, &zone.domain),
            record_type: "CNAME".to_string(),
            content: cname_target(app_url),
            ttl: AUTOMATIC_TTL,
            proxied: true,
        }
    }
}

pub fn subdomain(app: &AppName, base_domain: &str) -> String {
    format!("{}.{}", app, base_domain)
}

/// Strip a leading `https://` and trailing slashes from an app URL.
///
/// Ports and paths are left untouched.
pub fn cname_target(app_url: &str) -> String {
    app_url.strip_prefix("https://").unwrap_or(app_url).trim_end_matches('/').to_string()
}
