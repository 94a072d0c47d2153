use serde::Serialize;
use std::collections::HashSet;

use crate::types::ArticleRecord;

/// Value that selects every record in a filter select.
pub const ALL: &str = "all";

/// Conjunction of optional criteria over [`ArticleRecord`]s.
///
/// Values are stored trimmed and lowercased. A value that is empty or equal
/// to [`ALL`] (in any case) is no criterion at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleFilter {
    country: Option<String>,
    bias: Option<String>,
    text: Option<String>,
    language: Option<String>,
}

fn criterion(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_lowercase())
    }
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches the country code or the country display name.
    pub fn country(mut self, value: Option<&str>) -> Self {
        self.country = criterion(value);
        self
    }

    pub fn bias(mut self, value: Option<&str>) -> Self {
        self.bias = criterion(value);
        self
    }

    /// Substring of title, summary or source.
    pub fn text(mut self, value: Option<&str>) -> Self {
        self.text = criterion(value);
        self
    }

    pub fn language(mut self, value: Option<&str>) -> Self {
        self.language = criterion(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.bias.is_none() && self.text.is_none() && self.language.is_none()
    }

    pub fn matches(&self, record: &ArticleRecord) -> bool {
        if let Some(country) = &self.country {
            let by_code = record
                .country
                .code
                .as_deref()
                .is_some_and(|code| code.to_lowercase() == *country);
            if !by_code && record.country.name.to_lowercase() != *country {
                return false;
            }
        }
        if let Some(bias) = &self.bias {
            if record.bias.slug() != bias.as_str() {
                return false;
            }
        }
        if let Some(language) = &self.language {
            match &record.language {
                Some(lang) if lang.to_lowercase() == *language => {}
                _ => return false,
            }
        }
        if let Some(text) = &self.text {
            let hit = [&record.title, &record.summary, &record.source]
                .iter()
                .any(|field| field.to_lowercase().contains(text.as_str()));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Matching records in catalog order.
    pub fn apply(&self, records: &[ArticleRecord]) -> Vec<ArticleRecord> {
        let matched: Vec<ArticleRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        tracing::debug!(
            "filter {:?} kept {} of {} records",
            self,
            matched.len(),
            records.len()
        );
        matched
    }
}

/// Number of distinct countries among `records`.
pub fn distinct_countries(records: &[ArticleRecord]) -> usize {
    records
        .iter()
        .map(|record| record.country.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArticleCatalog, StaticCatalog};
    use crate::types::Bias;

    fn perspectives() -> Vec<ArticleRecord> {
        StaticCatalog::new().perspectives("climate")
    }

    #[test]
    fn test_all_and_empty_values_are_noops() {
        let records = perspectives();
        for value in [None, Some(""), Some("   "), Some("all"), Some("ALL")] {
            let filter = ArticleFilter::new()
                .country(value)
                .bias(value)
                .text(value)
                .language(value);
            assert!(filter.is_empty());
            assert_eq!(filter.apply(&records), records);
        }
    }

    #[test]
    fn test_bias_filter_keeps_only_matching_label() {
        let records = perspectives();
        let left = ArticleFilter::new().bias(Some("left")).apply(&records);
        assert_eq!(left.len(), 2);
        assert!(left.iter().all(|r| r.bias == Bias::Left));

        let left = ArticleFilter::new().bias(Some("Left")).apply(&records);
        assert!(left.iter().all(|r| r.bias == Bias::Left));
    }

    #[test]
    fn test_unmatched_value_gives_empty_result() {
        let records = perspectives();
        assert!(ArticleFilter::new().bias(Some("purple")).apply(&records).is_empty());
        assert!(ArticleFilter::new().country(Some("FR")).apply(&records).is_empty());
        assert!(ArticleFilter::new().text(Some("zzzz")).apply(&records).is_empty());
    }

    #[test]
    fn test_country_matches_code_or_name() {
        let records = perspectives();
        let by_code = ArticleFilter::new().country(Some("GB")).apply(&records);
        let by_name = ArticleFilter::new()
            .country(Some("united kingdom"))
            .apply(&records);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code, by_name);
        assert_eq!(by_code[0].source, "BBC News");
    }

    #[test]
    fn test_language_requires_tag() {
        let records = StaticCatalog::new().browse().to_vec();
        assert!(records.iter().all(|r| r.language.is_none()));
        assert!(ArticleFilter::new()
            .language(Some("english"))
            .apply(&records)
            .is_empty());

        let english = ArticleFilter::new()
            .language(Some("English"))
            .apply(&perspectives());
        assert_eq!(english.len(), 2);
    }

    #[test]
    fn test_text_is_case_insensitive_substring() {
        let records = StaticCatalog::new().browse().to_vec();
        let hits = ArticleFilter::new().text(Some("FEDERAL")).apply(&records);
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);

        let by_source = ArticleFilter::new().text(Some("fox")).apply(&records);
        assert_eq!(by_source.len(), 1);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let records = perspectives();
        let hits = ArticleFilter::new()
            .bias(Some("centre"))
            .language(Some("german"))
            .apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source, "Deutsche Welle");

        assert!(ArticleFilter::new()
            .bias(Some("left"))
            .country(Some("DE"))
            .apply(&records)
            .is_empty());
    }

    #[test]
    fn test_distinct_countries() {
        let records = perspectives();
        assert_eq!(distinct_countries(&records), 6);
        assert_eq!(distinct_countries(&StaticCatalog::new().browse().to_vec()), 1);
        assert_eq!(distinct_countries(&[]), 0);
    }
}
