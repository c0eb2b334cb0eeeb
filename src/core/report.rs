use chrono::Utc;

use crate::core::emails::{dedupe_emails, domain_counts, first_with_domain, is_well_formed};
use crate::domain::model::{DomainCount, FirstMatch, Roster, RosterReport};

impl RosterReport {
    /// Summarizes a roster, optionally locating the first entry for `target_domain`.
    pub fn build(roster: &Roster, target_domain: Option<&str>) -> Self {
        let entries = &roster.entries;
        let well_formed = entries.iter().filter(|e| is_well_formed(e)).count();

        let first_match = target_domain.and_then(|domain| {
            first_with_domain(entries, domain).map(|index| FirstMatch {
                index,
                email: entries[index].clone(),
            })
        });

        Self {
            source: roster.source.clone(),
            total_entries: entries.len(),
            well_formed,
            malformed: entries.len() - well_formed,
            unique_emails: dedupe_emails(entries),
            domain_counts: domain_counts(entries)
                .into_iter()
                .map(DomainCount::from)
                .collect(),
            target_domain: target_domain.map(str::to_string),
            first_match,
            generated_at: Utc::now(),
        }
    }

    pub fn duplicates_removed(&self) -> usize {
        self.well_formed - self.unique_emails.len()
    }
}
