use crate::domain::{AppName, CloudflareSettings, DnsRecord, Outcome};
use crate::ports::DnsProvider;

/// Point `{app}.{domain}` at the app's web host with a proxied CNAME.
///
/// Never returns an error: incomplete credentials and provider failures
/// both become `Outcome::Failed`.
pub fn bind_domain<D: DnsProvider>(
    dns: &D,
    settings: &CloudflareSettings,
    app: &AppName,
    app_url: &str,
) -> Outcome<DnsRecord> {
    let Some(zone) = settings.zone() else {
        return Outcome::failed("Cloudflare configuration is incomplete");
    };

    let record = DnsRecord::cname(app, app_url, &zone);
    match dns.create_dns_record(&zone, &record) {
        Ok(()) => {
            tracing::info!(name = %record.name, content = %record.content, "DNS record created");
            Outcome::Success(record)
        }
        Err(e) => {
            tracing::warn!(name = %record.name, error = %e, "DNS record creation failed");
            Outcome::failed(e.to_string())
        }
    }
}
