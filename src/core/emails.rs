use std::collections::{BTreeMap, HashSet};

/// Separator that splits an entry into local part and domain.
pub const SEPARATOR: char = '@';

/// An entry is well-formed when it carries at least one `@`.
pub fn is_well_formed(entry: &str) -> bool {
    entry.contains(SEPARATOR)
}

/// Returns the substring after the first `@`, or `None` for malformed entries.
///
/// `"a@"` is well-formed and yields an empty domain.
pub fn domain_of(entry: &str) -> Option<&str> {
    entry.split_once(SEPARATOR).map(|(_, domain)| domain)
}

/// Removes case-insensitive duplicates while keeping the first form seen.
///
/// Malformed entries are dropped entirely. The output keeps the relative
/// order of first occurrences.
pub fn dedupe_emails<S: AsRef<str>>(emails: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for email in emails.iter().map(AsRef::as_ref) {
        if !is_well_formed(email) {
            continue;
        }
        if seen.insert(email.to_lowercase()) {
            result.push(email.to_string());
        }
    }

    result
}

/// Index of the first entry whose domain matches `domain`, case-insensitively.
///
/// Indices refer to positions in `emails` as given, malformed entries included.
pub fn first_with_domain<S: AsRef<str>>(emails: &[S], domain: &str) -> Option<usize> {
    let target = domain.to_lowercase();

    emails.iter().position(|email| {
        domain_of(email.as_ref())
            .map(|d| d.to_lowercase() == target)
            .unwrap_or(false)
    })
}

/// Counts well-formed entries per lowercased domain, sorted by domain.
pub fn domain_counts<S: AsRef<str>>(emails: &[S]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for domain in emails.iter().filter_map(|email| domain_of(email.as_ref())) {
        *counts.entry(domain.to_lowercase()).or_insert(0) += 1;
    }

    // Keys are already folded, so map order is the case-insensitive order.
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_keeps_first_casing() {
        let emails = ["ALICE@x.com", "alice@x.com", "bob@Y.com"];
        assert_eq!(dedupe_emails(&emails), vec!["ALICE@x.com", "bob@Y.com"]);
    }

    #[test]
    fn test_dedupe_drops_malformed() {
        assert_eq!(dedupe_emails(&["noatsign", "a@x.com"]), vec!["a@x.com"]);
        assert_eq!(dedupe_emails(&["noatsign", "noatsign"]), Vec::<String>::new());
    }

    #[test]
    fn test_dedupe_empty_input() {
        let empty: [&str; 0] = [];
        assert!(dedupe_emails(&empty).is_empty());
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let emails = vec![
            "Carol@Z.org".to_string(),
            "bad".to_string(),
            "carol@z.org".to_string(),
            "dave@z.org".to_string(),
            "CAROL@z.ORG".to_string(),
        ];
        let once = dedupe_emails(&emails);
        assert_eq!(dedupe_emails(&once), once);
        assert_eq!(once, vec!["Carol@Z.org", "dave@z.org"]);
    }

    #[test]
    fn test_dedupe_compares_whole_string() {
        // same domain, different local parts
        let emails = ["a@x.com", "b@x.com", "A@X.COM"];
        assert_eq!(dedupe_emails(&emails), vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_first_with_domain_match() {
        assert_eq!(first_with_domain(&["a@x.com", "b@y.com"], "y.com"), Some(1));
    }

    #[test]
    fn test_first_with_domain_no_match() {
        assert_eq!(first_with_domain(&["a@x.com"], "z.com"), None);
        let empty: [&str; 0] = [];
        assert_eq!(first_with_domain(&empty, "x.com"), None);
    }

    #[test]
    fn test_first_with_domain_keeps_original_index() {
        assert_eq!(first_with_domain(&["bad", "a@X.Com"], "x.com"), Some(1));
        assert_eq!(first_with_domain(&["a@x.com", "b@x.com"], "X.COM"), Some(0));
    }

    #[test]
    fn test_first_with_domain_uses_first_separator() {
        // domain of "a@b@c.com" is "b@c.com"
        assert_eq!(first_with_domain(&["a@b@c.com"], "c.com"), None);
        assert_eq!(first_with_domain(&["a@b@c.com"], "b@c.com"), Some(0));
    }

    #[test]
    fn test_first_with_domain_empty_domain() {
        assert_eq!(first_with_domain(&["nope", "a@"], ""), Some(1));
    }

    #[test]
    fn test_domain_counts_basic() {
        let emails = ["a@x.com", "b@x.com", "c@y.com"];
        assert_eq!(
            domain_counts(&emails),
            vec![("x.com".to_string(), 2), ("y.com".to_string(), 1)]
        );
    }

    #[test]
    fn test_domain_counts_empty() {
        let empty: [&str; 0] = [];
        assert!(domain_counts(&empty).is_empty());
        assert!(domain_counts(&["bad", "worse"]).is_empty());
    }

    #[test]
    fn test_domain_counts_sorted_case_insensitive() {
        assert_eq!(
            domain_counts(&["a@Z.com", "b@a.com"]),
            vec![("a.com".to_string(), 1), ("z.com".to_string(), 1)]
        );
    }

    #[test]
    fn test_domain_counts_folds_mixed_case() {
        let emails = ["a@Example.COM", "b@example.com", "c@EXAMPLE.com", "d@"];
        assert_eq!(
            domain_counts(&emails),
            vec![("".to_string(), 1), ("example.com".to_string(), 3)]
        );
    }

    #[test]
    fn test_domain_counts_sum_matches_well_formed() {
        let emails = ["a@x.com", "oops", "b@y.com", "B@Y.com", "", "c@"];
        let total: usize = domain_counts(&emails).iter().map(|(_, c)| c).sum();
        let well_formed = emails.iter().filter(|e| is_well_formed(e)).count();
        assert_eq!(total, well_formed);
        assert_eq!(total, 4);
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("a@x.com"), Some("x.com"));
        assert_eq!(domain_of("a@"), Some(""));
        assert_eq!(domain_of("plain"), None);
    }
}
