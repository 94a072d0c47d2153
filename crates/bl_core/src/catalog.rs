use crate::data;
use crate::filter::ArticleFilter;
use crate::types::{ArticleDetail, ArticleRecord, Category, PerspectiveTemplate};
use crate::{Error, Result};

/// Topic shown in perspective titles when no query is known.
pub const DEFAULT_TOPIC: &str = "Global";

/// Read-only source of everything the pages display.
pub trait ArticleCatalog: Send + Sync {
    /// Records listed on the categories page.
    fn browse(&self) -> &[ArticleRecord];

    /// Records highlighted on the home page.
    fn featured(&self) -> &[ArticleRecord];

    /// Perspectives on `query`, one per source country.
    fn perspectives(&self, query: &str) -> Vec<ArticleRecord>;

    fn categories(&self) -> &[Category];

    /// Detail for `id`. `query` fills in perspective titles.
    fn detail(&self, id: &str, query: Option<&str>) -> Result<ArticleDetail>;

    /// Category by id, falling back to the first one.
    fn category(&self, id: Option<&str>) -> Option<&Category> {
        let categories = self.categories();
        id.and_then(|id| categories.iter().find(|c| c.id == id))
            .or_else(|| categories.first())
    }

    fn search(&self, filter: &ArticleFilter) -> Vec<ArticleRecord> {
        filter.apply(self.browse())
    }
}

pub struct StaticCatalog {
    browse: Vec<ArticleRecord>,
    featured: Vec<ArticleRecord>,
    templates: Vec<PerspectiveTemplate>,
    details: Vec<ArticleDetail>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            browse: data::browse_articles(),
            featured: data::featured_articles(),
            templates: data::perspective_templates(),
            details: data::article_details(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleCatalog for StaticCatalog {
    fn browse(&self) -> &[ArticleRecord] {
        &self.browse
    }

    fn featured(&self) -> &[ArticleRecord] {
        &self.featured
    }

    fn perspectives(&self, query: &str) -> Vec<ArticleRecord> {
        self.templates
            .iter()
            .map(|template| template.instantiate(query))
            .collect()
    }

    fn categories(&self) -> &[Category] {
        data::CATEGORIES
    }

    fn detail(&self, id: &str, query: Option<&str>) -> Result<ArticleDetail> {
        if let Some(detail) = self.details.iter().find(|d| d.record.id == id) {
            return Ok(detail.clone());
        }
        if let Some(record) = self.browse.iter().chain(&self.featured).find(|r| r.id == id) {
            return Ok(ArticleDetail::from_record(record.clone()));
        }
        let topic = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_TOPIC);
        self.templates
            .iter()
            .find(|t| t.record.id == id)
            .map(|t| ArticleDetail::from_record(t.instantiate(topic)))
            .ok_or_else(|| Error::NotFound(format!("article '{}'", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = StaticCatalog::new();
        let mut ids = HashSet::new();
        let all = catalog
            .browse()
            .iter()
            .chain(catalog.featured())
            .cloned()
            .chain(catalog.perspectives("x"));
        for record in all {
            assert!(ids.insert(record.id.clone()), "duplicate id {}", record.id);
        }
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_full_detail_wins_over_record() {
        let catalog = StaticCatalog::new();
        let detail = catalog.detail("1", None).unwrap();
        assert_eq!(detail.author.as_deref(), Some("Sarah Martinez"));
        assert_eq!(detail.paragraphs.len(), 6);
        assert_eq!(detail.analysis.unwrap().sentiment.neutral, 45);
    }

    #[test]
    fn test_detail_for_featured_record() {
        let catalog = StaticCatalog::new();
        let detail = catalog.detail("8", None).unwrap();
        assert_eq!(detail.record.source, "BBC News");
        assert!(detail.analysis.is_none());
    }

    #[test]
    fn test_perspective_detail_uses_query() {
        let catalog = StaticCatalog::new();
        let detail = catalog.detail("12", Some("Housing")).unwrap();
        assert_eq!(detail.record.title, "UK Parliament Reviews Housing Policy Impact");
        assert!(detail.analysis.is_some());

        let detail = catalog.detail("12", Some("  ")).unwrap();
        assert_eq!(detail.record.title, "UK Parliament Reviews Global Policy Impact");
    }

    #[test]
    fn test_unknown_detail_is_not_found() {
        let catalog = StaticCatalog::new();
        assert!(matches!(catalog.detail("999", None), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_category_fallback() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.category(Some("health")).map(|c| c.name), Some("Health"));
        assert_eq!(catalog.category(Some("sports")).map(|c| c.id), Some("politics"));
        assert_eq!(catalog.category(None).map(|c| c.id), Some("politics"));
    }

    #[test]
    fn test_search_filters_browse_records() {
        let catalog = StaticCatalog::new();
        let filter = ArticleFilter::new().bias(Some("right"));
        let ids: Vec<String> = catalog.search(&filter).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "5"]);
    }
}
