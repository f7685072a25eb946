//! Domain Entities - Core business objects
//!
//! These entities represent the records flowing through the enrichment
//! pipeline. They have no external dependencies and carry no wire format.

/// A stored RSVP row whose country has not been resolved yet.
///
/// Pending records come out of the record source with a captured IP
/// address and a blank country field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    /// Opaque record identifier assigned by the store
    pub id: String,
    /// IP address captured when the RSVP was submitted
    pub ip: String,
}

impl PendingRecord {
    /// Combine this record with the country its IP resolved to.
    pub fn with_country(self, country: String) -> ResolvedRecord {
        ResolvedRecord {
            id: self.id,
            country,
        }
    }
}

/// A record whose country has been resolved, ready to write back.
///
/// Only records that resolved successfully become ResolvedRecords;
/// failed lookups drop the record instead of producing a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    /// Opaque record identifier assigned by the store
    pub id: String,
    /// Resolved country value for the record's IP
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_country_keeps_id() {
        let pending = PendingRecord {
            id: "rec123".to_string(),
            ip: "203.0.113.7".to_string(),
        };

        let resolved = pending.with_country("BR".to_string());

        assert_eq!(resolved.id, "rec123");
        assert_eq!(resolved.country, "BR");
    }

    #[test]
    fn test_pending_record_equality() {
        let a = PendingRecord {
            id: "rec1".to_string(),
            ip: "198.51.100.1".to_string(),
        };
        let b = PendingRecord {
            id: "rec1".to_string(),
            ip: "198.51.100.1".to_string(),
        };
        let c = PendingRecord {
            id: "rec2".to_string(),
            ip: "198.51.100.1".to_string(),
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_resolved_record_clone() {
        let record = ResolvedRecord {
            id: "rec1".to_string(),
            country: "US".to_string(),
        };

        let cloned = record.clone();

        assert_eq!(cloned.id, record.id);
        assert_eq!(cloned.country, record.country);
    }
}
