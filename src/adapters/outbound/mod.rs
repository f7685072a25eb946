mod airtable_record_store;
mod ipinfo_country_resolver;

pub use airtable_record_store::{AirtableConfig, AirtableRecordStore};
pub use ipinfo_country_resolver::{IpinfoConfig, IpinfoCountryResolver};
