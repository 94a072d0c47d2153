pub mod catalog;
pub mod contact;
pub mod data;
pub mod error;
pub mod filter;
pub mod types;

pub use catalog::{ArticleCatalog, StaticCatalog};
pub use error::{Error, FieldError, Result};
pub use filter::ArticleFilter;
pub use types::{ArticleDetail, ArticleRecord, Bias, Category, Country, Sentiment};

pub mod prelude {
    pub use super::catalog::{ArticleCatalog, StaticCatalog};
    pub use super::filter::ArticleFilter;
    pub use super::types::{ArticleRecord, Bias};
    pub use super::{Error, Result};
}
