use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw entries in input order, as read from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub source: String,
    pub entries: Vec<String>,
}

impl Roster {
    pub fn new(source: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            source: source.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

impl From<(String, usize)> for DomainCount {
    fn from((domain, count): (String, usize)) -> Self {
        Self { domain, count }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstMatch {
    pub index: usize,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterReport {
    pub source: String,
    pub total_entries: usize,
    pub well_formed: usize,
    pub malformed: usize,
    pub unique_emails: Vec<String>,
    pub domain_counts: Vec<DomainCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_match: Option<FirstMatch>,
    pub generated_at: DateTime<Utc>,
}
