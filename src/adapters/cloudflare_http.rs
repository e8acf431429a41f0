//! Cloudflare DNS API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, CloudflareZone, DnsRecord};
use crate::ports::DnsProvider;

pub const CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com/client/v4";
const X_AUTH_EMAIL: &str = "X-Auth-Email";
const X_AUTH_KEY: &str = "X-Auth-Key";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Cloudflare v4 API.
///
/// Credentials travel with each call inside the [`CloudflareZone`].
#[derive(Debug, Clone)]
pub struct CloudflareHttpClient {
    api_url: Url,
    client: Client,
}

impl CloudflareHttpClient {
    pub fn new(api_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url, client })
    }

    /// Client for the public Cloudflare API.
    pub fn public() -> Result<Self, AppError> {
        let api_url = Url::parse(CLOUDFLARE_API_URL)
            .map_err(|e| AppError::Configuration(format!("Invalid Cloudflare API URL: {}", e)))?;
        Self::new(api_url)
    }
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl DnsProvider for CloudflareHttpClient {
    fn create_dns_record(&self, zone: &CloudflareZone, record: &DnsRecord) -> Result<(), AppError> {
        let url = format!(
            "{}/zones/{}/dns_records",
            self.api_url.as_str().trim_end_matches('/'),
            zone.zone_id
        );
        tracing::debug!(%url, name = %record.name, "creating DNS record");

        let response = self
            .client
            .post(url)
            .header(X_AUTH_EMAIL, &zone.email)
            .header(X_AUTH_KEY, &zone.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(record)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        let text = response.text().unwrap_or_default();
        let envelope: Option<ApiEnvelope> = serde_json::from_str(&text).ok();

        match envelope {
            Some(envelope) if status.is_success() && envelope.success => Ok(()),
            Some(envelope) if !envelope.errors.is_empty() => {
                let details = envelope
                    .errors
                    .iter()
                    .map(|e| format!("{} ({})", e.message, e.code))
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(AppError::DnsApi(details))
            }
            _ => Err(AppError::DnsApi(format!("status {}: {}", status.as_u16(), text))),
        }
    }
}
