// src/extractors/scanner.rs
use regex::{Captures, Regex};

/// One match of a global scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch {
    /// The full matched text.
    pub full: String,
    /// Positional groups, group 1 first. `None` when the group did not participate.
    pub groups: Vec<Option<String>>,
    pub named_value: Option<String>,
    pub named_text: Option<String>,
}

impl ScanMatch {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let owned = |m: regex::Match<'_>| m.as_str().to_string();
        Self {
            full: caps.get(0).map(owned).unwrap_or_default(),
            groups: caps.iter().skip(1).map(|g| g.map(owned)).collect(),
            named_value: caps.name("value").map(owned),
            named_text: caps.name("text").map(owned),
        }
    }

    /// 1-indexed positional group.
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(|g| g.as_deref())
    }

    pub fn has_positional_groups(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Returns every non-overlapping match of `regex` in `haystack`, left to right.
///
/// Each search resumes where the previous match ended. A zero-length match is
/// reported and ends the scan.
pub fn scan_all(haystack: &str, regex: &Regex) -> Vec<ScanMatch> {
    let mut matches = Vec::new();
    let mut start = 0;

    while let Some(caps) = regex.captures_at(haystack, start) {
        let Some(whole) = caps.get(0) else { break };
        matches.push(ScanMatch::from_captures(&caps));
        if whole.is_empty() {
            break;
        }
        start = whole.end();
    }

    tracing::trace!("Scanned '{}' with /{}/: {} matches", haystack, regex.as_str(), matches.len());
    matches
}
