use std::sync::Mutex;

use crate::domain::{AppError, CloudflareZone, DnsRecord};
use crate::ports::DnsProvider;

#[derive(Default)]
pub struct FakeDns {
    pub records: Mutex<Vec<(String, DnsRecord)>>,
    pub fail: Mutex<bool>,
}

impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let dns = Self::new();
        *dns.fail.lock().unwrap() = true;
        dns
    }

    pub fn created_records(&self) -> Vec<(String, DnsRecord)> {
        self.records.lock().unwrap().clone()
    }
}

impl DnsProvider for FakeDns {
    fn create_dns_record(&self, zone: &CloudflareZone, record: &DnsRecord) -> Result<(), AppError> {
        if *self.fail.lock().unwrap() {
            return Err(AppError::DnsApi("Record already exists. (81053)".into()));
        }
        self.records.lock().unwrap().push((zone.zone_id.clone(), record.clone()));
        Ok(())
    }
}
