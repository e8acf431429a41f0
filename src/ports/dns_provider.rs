use crate::domain::{AppError, CloudflareZone, DnsRecord};

/// Port for DNS record management.
pub trait DnsProvider {
    /// Create a record in the zone. Existing records are not checked.
    fn create_dns_record(&self, zone: &CloudflareZone, record: &DnsRecord)
    -> Result<(), AppError>;
}
