// src/data.rs

use std::collections::HashSet;

use serde::Serialize;

/// Placeholder for a field whose source element is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// One job listing as it appears on the page.
///
/// Always fully populated: a missing source element degrades that
/// field to [`NOT_AVAILABLE`] instead of dropping the record.
/// Serde renames give the exported CSV its header row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Expiry Date")]
    pub expiry_date: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Drop records that exactly match an earlier one (all five fields).
/// First occurrence wins; surviving order is unchanged.
pub fn dedup_records(records: &mut Vec<JobRecord>) {
    let mut seen: HashSet<JobRecord> = HashSet::with_capacity(records.len());
    records.retain(|r| seen.insert(r.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> JobRecord {
        JobRecord {
            title: s!(title),
            company: s!("Acme"),
            location: s!("Harare"),
            expiry_date: s!("2024-01-01"),
            description: s!("Build things."),
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let mut records = vec![record("A"), record("B"), record("A"), record("C")];
        dedup_records(&mut records);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn dedup_requires_all_five_fields_equal() {
        let mut a = record("A");
        a.location = s!("Bulawayo");
        let mut records = vec![record("A"), a];
        dedup_records(&mut records);
        assert_eq!(records.len(), 2);
    }
}
