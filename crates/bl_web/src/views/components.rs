use bl_core::types::{BiasAnalysis, SentimentTrend};
use bl_core::{ArticleRecord, Bias, Country, Sentiment};

use super::html::escape;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    #[default]
    Small,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub show_analysis: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self { show_analysis: true }
    }
}

pub fn bias_class(bias: Bias) -> &'static str {
    match bias {
        Bias::Left => "bias-left",
        Bias::Right => "bias-right",
        Bias::Centre => "bias-centre",
    }
}

pub fn bias_badge(bias: Bias, size: BadgeSize) -> String {
    let size = match size {
        BadgeSize::Small => "badge-sm",
        BadgeSize::Medium => "badge-md",
    };
    format!(
        r#"<span class="badge {} {}">{}</span>"#,
        bias_class(bias),
        size,
        bias
    )
}

pub fn flag(country: &Country) -> String {
    format!(
        r#"<span class="flag" title="{}">{}</span>"#,
        escape(&country.name),
        country.flag()
    )
}

fn flag_image(country: &Country) -> String {
    match country.flag_image_url() {
        Some(url) => format!(
            r#"<img class="flag-img" src="{}" alt="{} flag" width="24" height="18">"#,
            escape(&url),
            escape(&country.name)
        ),
        None => flag(country),
    }
}

pub fn progress(value: u8) -> String {
    format!(
        r#"<div class="progress"><div class="progress-bar" style="width: {}%"></div></div>"#,
        value.min(100)
    )
}

pub fn trend_icon(trend: SentimentTrend) -> &'static str {
    match trend {
        SentimentTrend::Up => r#"<span class="trend trend-up">↗</span>"#,
        SentimentTrend::Down => r#"<span class="trend trend-down">↘</span>"#,
        SentimentTrend::Flat => r#"<span class="trend trend-flat">–</span>"#,
    }
}

fn sentiment_row(label: &str, class: &str, value: u8) -> String {
    format!(
        r#"<div class="sentiment-row"><div class="row-between"><span class="{}">{}</span><span>{}%</span></div>{}</div>"#,
        class,
        label,
        value,
        progress(value)
    )
}

pub fn article_card(record: &ArticleRecord, options: CardOptions) -> String {
    let date = record
        .published
        .map(|d| format!(r#"<span class="muted small">{}</span>"#, d.format("%Y-%m-%d")))
        .unwrap_or_default();
    let actions = if options.show_analysis {
        let href = Route::Article {
            id: record.id.clone(),
            query: None,
        }
        .href();
        format!(
            r#"<div class="card-actions"><a class="button" href="{}">View Full Analysis</a></div>"#,
            escape(&href)
        )
    } else {
        String::new()
    };
    format!(
        r#"<article class="card article-card">
  <header class="row-between"><h3 class="card-title">{title}</h3>{badge}</header>
  <p class="muted">{summary}</p>
  <div class="row-between"><div class="meta">{flag}<span class="source">{source}</span></div>{date}</div>
  {actions}
</article>"#,
        title = escape(&record.title),
        badge = bias_badge(record.bias, BadgeSize::Small),
        summary = escape(&record.summary),
        flag = flag(&record.country),
        source = escape(&record.source),
        date = date,
        actions = actions,
    )
}

/// Card of the results page: flag, sentiment and explanation inline.
pub fn perspective_card(record: &ArticleRecord, query: &str) -> String {
    let sentiment = record
        .sentiment
        .map(|s| {
            format!(
                r#"<div class="sentiment"><div class="row">{}<span class="label">Sentiment</span></div>{}{}</div>"#,
                trend_icon(s.trend()),
                sentiment_row("Positive", "", s.positive),
                sentiment_row("Negative", "", s.negative)
            )
        })
        .unwrap_or_default();
    let explanation = record
        .bias_explanation
        .as_deref()
        .map(|text| {
            format!(
                r#"<div class="explanation"><h4>AI Bias Analysis:</h4><p>{}</p></div>"#,
                escape(text)
            )
        })
        .unwrap_or_default();
    let href = Route::Article {
        id: record.id.clone(),
        query: Some(query.to_string()),
    }
    .href();
    format!(
        r#"<article class="card perspective-card">
  <header class="row-between"><div class="meta">{flag}<span class="country">{country}</span></div>{badge}</header>
  <h3 class="card-title">{title}</h3>
  <p class="muted">{summary}</p>
  <div class="row-between small muted"><span>{source}</span><span>{language}</span></div>
  {sentiment}
  {explanation}
  <a class="button outline wide" href="{href}">View Full Analysis</a>
</article>"#,
        flag = flag_image(&record.country),
        country = escape(&record.country.name),
        badge = bias_badge(record.bias, BadgeSize::Small),
        title = escape(&record.title),
        summary = escape(&record.summary),
        source = escape(&record.source),
        language = escape(record.language.as_deref().unwrap_or("")),
        sentiment = sentiment,
        explanation = explanation,
        href = escape(&href),
    )
}

pub fn sentiment_breakdown(sentiment: &Sentiment) -> String {
    format!(
        "{}{}{}",
        sentiment_row("Positive", "positive", sentiment.positive),
        sentiment_row("Neutral", "neutral", sentiment.neutral),
        sentiment_row("Negative", "negative", sentiment.negative)
    )
}

pub fn bias_indicator(analysis: &BiasAnalysis) -> String {
    format!(
        r#"<section class="card bias-indicator">
  <header class="row-between"><h3>AI Bias Analysis</h3>{badge}</header>
  <div><h4>Emotional Sentiment</h4>{breakdown}</div>
  <div><h4>Bias Explanation</h4><p class="muted">{explanation}</p></div>
</section>"#,
        badge = bias_badge(analysis.political, BadgeSize::Medium),
        breakdown = sentiment_breakdown(&analysis.sentiment),
        explanation = escape(&analysis.explanation),
    )
}

pub fn empty_state() -> &'static str {
    r#"<div class="empty-state"><div class="empty-icon">🌐</div><h3>No articles found</h3><p class="muted">Try adjusting your filters or search for a different topic.</p></div>"#
}
