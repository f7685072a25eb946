mod country_resolver;
mod record_sink;
mod record_source;

pub use country_resolver::CountryResolver;
pub use record_sink::RecordSink;
pub use record_source::RecordSource;
