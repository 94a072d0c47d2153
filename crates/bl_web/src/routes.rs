use bl_core::ArticleFilter;
use serde::Deserialize;
use url::form_urlencoded;

pub const HOME: &str = "/";
pub const SEARCH: &str = "/search";
pub const RESULTS: &str = "/results";
pub const CATEGORIES: &str = "/categories";
pub const ARTICLE: &str = "/article/:id";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";

pub const API_ARTICLES: &str = "/api/articles";
pub const API_ARTICLE: &str = "/api/articles/:id";
pub const API_PERSPECTIVES: &str = "/api/perspectives";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Query string of the results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultsQuery {
    pub q: Option<String>,
    pub country: Option<String>,
    pub bias: Option<String>,
    pub language: Option<String>,
}

impl ResultsQuery {
    pub fn for_query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter::new()
            .country(self.country.as_deref())
            .bias(self.bias.as_deref())
            .language(self.language.as_deref())
    }
}

/// Query string of the categories page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoriesQuery {
    pub category: Option<String>,
    pub country: Option<String>,
    pub bias: Option<String>,
    pub q: Option<String>,
}

impl CategoriesQuery {
    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter::new()
            .country(self.country.as_deref())
            .bias(self.bias.as_deref())
            .text(self.q.as_deref())
    }

    pub fn with_category(&self, category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..self.clone()
        }
    }

    /// Same category, no filters.
    pub fn cleared(&self) -> Self {
        Self {
            category: self.category.clone(),
            ..Self::default()
        }
    }
}

/// Filters accepted by the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiQuery {
    pub q: Option<String>,
    pub country: Option<String>,
    pub bias: Option<String>,
    pub language: Option<String>,
}

impl ApiQuery {
    /// Filter without the free-text criterion.
    pub fn selection(&self) -> ArticleFilter {
        ArticleFilter::new()
            .country(self.country.as_deref())
            .bias(self.bias.as_deref())
            .language(self.language.as_deref())
    }

    pub fn filter(&self) -> ArticleFilter {
        self.selection().text(self.q.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleQuery {
    pub q: Option<String>,
}

/// A page the application can link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { query: String },
    Results(ResultsQuery),
    Categories(CategoriesQuery),
    Article { id: String, query: Option<String> },
    About,
    Contact,
}

fn with_query(path: &str, pairs: &[(&str, Option<&str>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{}?{}", path, serializer.finish())
    } else {
        path.to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Route {
    pub fn href(&self) -> String {
        match self {
            Route::Home => HOME.to_string(),
            Route::Search { query } => with_query(SEARCH, &[("q", Some(query.as_str()))]),
            Route::Results(params) => with_query(
                RESULTS,
                &[
                    ("q", Some(params.query())),
                    ("country", non_empty(&params.country)),
                    ("bias", non_empty(&params.bias)),
                    ("language", non_empty(&params.language)),
                ],
            ),
            Route::Categories(params) => with_query(
                CATEGORIES,
                &[
                    ("category", non_empty(&params.category)),
                    ("country", non_empty(&params.country)),
                    ("bias", non_empty(&params.bias)),
                    ("q", non_empty(&params.q)),
                ],
            ),
            Route::Article { id, query } => {
                let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
                with_query(&format!("/article/{}", id), &[("q", non_empty(query))])
            }
            Route::About => ABOUT.to_string(),
            Route::Contact => CONTACT.to_string(),
        }
    }
}
