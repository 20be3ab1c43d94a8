pub const RECORD_KIND_TXT: &str = "TXT";

/// A generic DNS record as handed over by the host automation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub name: String,
    pub kind: String,
    pub content: String,
}

/// Challenge record management for a single zone.
pub trait Provider {
    /// Adds records to the zone. Returns the records that were added.
    fn append_records(&self, zone: &str, records: Vec<Record>) -> super::Result<Vec<Record>>;

    /// Deletes records from the zone. Returns the records that were deleted.
    fn delete_records(&self, zone: &str, records: Vec<Record>) -> super::Result<Vec<Record>>;
}

/// Joins a record name with its zone into an absolute name. Names that
/// already carry the zone come out unchanged, so joining is idempotent.
pub fn absolute_name(name: &str, zone: &str) -> String {
    if zone.is_empty() {
        return name.trim_matches('.').to_string();
    }

    let bare_zone = zone.trim_end_matches('.');
    let mut relative = name.trim_end_matches('.');

    if relative == bare_zone {
        relative = "";
    } else if let Some(prefix) = relative.strip_suffix(bare_zone) {
        if let Some(prefix) = prefix.strip_suffix('.') {
            relative = prefix;
        }
    }

    if relative.is_empty() || relative == "@" {
        return zone.to_string();
    }

    format!("{relative}.{zone}")
}
