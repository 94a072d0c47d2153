use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Marker used when a country has no known flag.
pub const FALLBACK_FLAG: &str = "🌍";

const FLAGS: &[(&str, &str)] = &[
    ("United States", "🇺🇸"),
    ("United Kingdom", "🇬🇧"),
    ("Germany", "🇩🇪"),
    ("France", "🇫🇷"),
    ("Canada", "🇨🇦"),
    ("Australia", "🇦🇺"),
    ("Japan", "🇯🇵"),
    ("India", "🇮🇳"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bias {
    Left,
    Right,
    Centre,
}

impl Bias {
    pub const ALL: [Bias; 3] = [Bias::Left, Bias::Right, Bias::Centre];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Left => "Left",
            Bias::Right => "Right",
            Bias::Centre => "Centre",
        }
    }

    /// Lowercase form used in query strings.
    pub fn slug(&self) -> &'static str {
        match self {
            Bias::Left => "left",
            Bias::Right => "right",
            Bias::Centre => "centre",
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Bias::ALL
            .into_iter()
            .find(|bias| bias.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidValue(format!("unknown bias label '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// ISO-3166 alpha-2 code, when the catalog knows it.
    pub code: Option<String>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn flag(&self) -> &'static str {
        country_flag(&self.name)
    }

    pub fn flag_image_url(&self) -> Option<String> {
        self.code
            .as_deref()
            .map(|code| format!("https://flagcdn.com/24x18/{}.png", code.to_lowercase()))
    }
}

/// Emoji flag for a country name, or [`FALLBACK_FLAG`] when unknown.
pub fn country_flag(name: &str) -> &'static str {
    FLAGS
        .iter()
        .find(|(country, _)| *country == name)
        .map(|(_, flag)| *flag)
        .unwrap_or(FALLBACK_FLAG)
}

/// Percentages for display. They are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentTrend {
    Up,
    Down,
    Flat,
}

impl Sentiment {
    pub fn new(positive: u8, neutral: u8, negative: u8) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    pub fn trend(&self) -> SentimentTrend {
        let positive = u16::from(self.positive);
        let negative = u16::from(self.negative);
        if positive > negative + 10 {
            SentimentTrend::Up
        } else if negative > positive + 10 {
            SentimentTrend::Down
        } else {
            SentimentTrend::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub country: Country,
    pub bias: Bias,
    pub published: Option<NaiveDate>,
    pub sentiment: Option<Sentiment>,
    pub bias_explanation: Option<String>,
    pub language: Option<String>,
}

impl ArticleRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        source: impl Into<String>,
        country: Country,
        bias: Bias,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            source: source.into(),
            country,
            bias,
            published: None,
            sentiment: None,
            bias_explanation: None,
            language: None,
        }
    }

    pub fn published(mut self, date: Option<NaiveDate>) -> Self {
        self.published = date;
        self
    }

    pub fn sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.bias_explanation = Some(explanation.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    pub political: Bias,
    pub sentiment: Sentiment,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub record: ArticleRecord,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub paragraphs: Vec<String>,
    pub key_points: Vec<String>,
    pub related: Vec<String>,
    pub analysis: Option<BiasAnalysis>,
}

impl ArticleDetail {
    /// Builds a detail view from a plain record; the summary becomes the body
    /// and an analysis is present only if the record carries one.
    pub fn from_record(record: ArticleRecord) -> Self {
        let analysis = match (record.sentiment, record.bias_explanation.as_ref()) {
            (Some(sentiment), Some(explanation)) => Some(BiasAnalysis {
                political: record.bias,
                sentiment,
                explanation: explanation.clone(),
            }),
            _ => None,
        };
        Self {
            paragraphs: vec![record.summary.clone()],
            record,
            author: None,
            read_time: None,
            key_points: Vec::new(),
            related: Vec::new(),
            analysis,
        }
    }
}

/// A results-page record whose title mentions the searched topic.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveTemplate {
    pub record: ArticleRecord,
}

impl PerspectiveTemplate {
    pub const PLACEHOLDER: &'static str = "{query}";

    pub fn new(record: ArticleRecord) -> Self {
        Self { record }
    }

    pub fn instantiate(&self, query: &str) -> ArticleRecord {
        let mut record = self.record.clone();
        record.title = record.title.replace(Self::PLACEHOLDER, query);
        record
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

/// A value/label pair offered by a filter select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_parsing_ignores_case() {
        assert_eq!("left".parse::<Bias>().unwrap(), Bias::Left);
        assert_eq!("CENTRE".parse::<Bias>().unwrap(), Bias::Centre);
        assert_eq!(" Right ".parse::<Bias>().unwrap(), Bias::Right);
        assert!("purple".parse::<Bias>().is_err());
    }

    #[test]
    fn test_unknown_country_uses_fallback_flag() {
        assert_eq!(country_flag("Germany"), "🇩🇪");
        assert_eq!(country_flag("Atlantis"), FALLBACK_FLAG);
        assert_eq!(Country::new("Atlantis").flag(), country_flag("Atlantis"));
        // Flags are keyed by exact display name.
        assert_eq!(country_flag("germany"), FALLBACK_FLAG);
    }

    #[test]
    fn test_flag_image_url_lowercases_code() {
        let country = Country::new("Brazil").with_code("BR");
        assert_eq!(
            country.flag_image_url().as_deref(),
            Some("https://flagcdn.com/24x18/br.png")
        );
        assert_eq!(Country::new("Brazil").flag_image_url(), None);
    }

    #[test]
    fn test_sentiment_trend() {
        assert_eq!(Sentiment::new(50, 35, 15).trend(), SentimentTrend::Up);
        assert_eq!(Sentiment::new(15, 25, 60).trend(), SentimentTrend::Down);
        assert_eq!(Sentiment::new(30, 40, 30).trend(), SentimentTrend::Flat);
        // Exactly ten points apart is still flat.
        assert_eq!(Sentiment::new(40, 20, 30).trend(), SentimentTrend::Flat);
        assert_eq!(Sentiment::new(255, 0, 250).trend(), SentimentTrend::Flat);
    }

    #[test]
    fn test_perspective_instantiation() {
        let template = PerspectiveTemplate::new(ArticleRecord::new(
            "11",
            "UK Parliament Reviews {query} Policy Impact",
            "summary",
            "BBC News",
            Country::new("United Kingdom").with_code("GB"),
            Bias::Centre,
        ));
        let record = template.instantiate("AI & <Ethics>");
        assert_eq!(record.title, "UK Parliament Reviews AI & <Ethics> Policy Impact");
        assert_eq!(record.id, "11");
    }

    #[test]
    fn test_detail_from_record_without_analysis() {
        let record = ArticleRecord::new(
            "2",
            "Title",
            "Summary text",
            "Reuters",
            Country::new("United States"),
            Bias::Centre,
        );
        let detail = ArticleDetail::from_record(record.clone());
        assert_eq!(detail.paragraphs, vec!["Summary text".to_string()]);
        assert!(detail.analysis.is_none());

        let detail = ArticleDetail::from_record(
            record
                .sentiment(Sentiment::new(10, 20, 30))
                .explanation("Because"),
        );
        let analysis = detail.analysis.unwrap();
        assert_eq!(analysis.political, Bias::Centre);
        assert_eq!(analysis.explanation, "Because");
    }
}
