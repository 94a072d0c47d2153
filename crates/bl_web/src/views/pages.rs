use bl_core::contact::{ContactForm, FeedbackType};
use bl_core::data::{BROWSE_COUNTRIES, LANGUAGES, RESULT_COUNTRIES};
use bl_core::filter::{distinct_countries, ALL};
use bl_core::types::FilterOption;
use bl_core::{ArticleDetail, ArticleRecord, Bias, Category, FieldError};

use super::components::{
    article_card, bias_badge, bias_indicator, empty_state, flag, perspective_card, BadgeSize,
    CardOptions,
};
use super::html::{escape, options};
use super::layout::{page, Nav, Toast};
use crate::routes::{self, CategoriesQuery, ResultsQuery, Route};

fn choices(list: &[FilterOption]) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    list.iter().map(|o| (o.value, o.label))
}

fn bias_choices(all_label: &'static str) -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL, all_label))
        .chain(Bias::ALL.iter().map(|b| (b.slug(), b.as_str())))
        .collect()
}

fn grid(records: &[ArticleRecord]) -> String {
    let cards: String = records
        .iter()
        .map(|r| article_card(r, CardOptions::default()))
        .collect();
    format!(r#"<div class="grid">{}</div>"#, cards)
}

pub fn home(featured: &[ArticleRecord]) -> String {
    const FEATURES: &[(&str, &str, &str)] = &[
        ("🛡️", "Bias Detection", "Advanced AI analyzes political leaning and emotional sentiment in every article"),
        ("🌐", "Global Coverage", "News from trusted sources worldwide in multiple languages"),
        ("⚡", "Real-time Analysis", "Instant bias detection and explanation powered by cutting-edge NLP"),
    ];
    let features: String = FEATURES
        .iter()
        .map(|(icon, title, description)| {
            format!(
                r#"<div class="card feature"><div class="feature-icon">{}</div><h3>{}</h3><p class="muted">{}</p></div>"#,
                icon, title, description
            )
        })
        .collect();
    let body = format!(
        r#"<section class="hero">
  <div class="container">
    <h1>See Every Side.<br><span>Read Smarter.</span></h1>
    <p class="muted">Discover political bias in global news with AI-powered analysis. Get the complete picture, not just one perspective.</p>
    <form class="search-form" action="{search}" method="get" role="search">
      <input type="search" name="q" placeholder="Search news topics..." aria-label="Search news topics">
      <button class="button" type="submit">Search</button>
    </form>
    <a class="button outline" href="{categories}">Start Exploring</a>
  </div>
</section>
<section class="container">
  <h2>How BiasLens Works</h2>
  <p class="muted">Our AI technology helps you understand the full story behind every news article</p>
  <div class="grid">{features}</div>
</section>
<section class="container">
  <div class="row-between">
    <div><h2>Featured Articles</h2><p class="muted">Latest news with AI bias analysis</p></div>
    <a class="button outline" href="{categories}">📈 View All Categories</a>
  </div>
  {grid}
</section>"#,
        search = routes::SEARCH,
        categories = Route::Categories(CategoriesQuery::default()).href(),
        features = features,
        grid = grid(featured),
    );
    page("See Every Side", Nav::Home, None, &body)
}

pub fn results(params: &ResultsQuery, records: &[ArticleRecord]) -> String {
    let query = params.query();
    let cards: String = records.iter().map(|r| perspective_card(r, query)).collect();
    let empty = if records.is_empty() { empty_state() } else { "" };
    let body = format!(
        r#"<section class="hero results-header">
  <div class="container">
    <a class="button outline" href="/">← Back to Search</a>
    <h1>Viewpoints on: "{query}"</h1>
    <p class="muted summary">Analyzing {count} articles from {countries} countries</p>
  </div>
</section>
<section class="container">
  <form class="filters" action="{action}" method="get">
    <span class="label">Filters:</span>
    <input type="hidden" name="q" value="{query}">
    <select name="country" aria-label="Country">{country_options}</select>
    <select name="bias" aria-label="Bias Level">{bias_options}</select>
    <select name="language" aria-label="Language">{language_options}</select>
    <button class="button" type="submit">Apply</button>
  </form>
</section>
<section class="container">
  <div class="grid">{cards}</div>
  {empty}
</section>"#,
        query = escape(query),
        count = records.len(),
        countries = distinct_countries(records),
        action = routes::RESULTS,
        country_options = options(
            choices(RESULT_COUNTRIES),
            params.country.as_deref().unwrap_or(ALL)
        ),
        bias_options = options(bias_choices("All Bias"), params.bias.as_deref().unwrap_or(ALL)),
        language_options = options(choices(LANGUAGES), params.language.as_deref().unwrap_or(ALL)),
        cards = cards,
        empty = empty,
    );
    page(&format!("Viewpoints on {}", query), Nav::None, None, &body)
}

fn active_filters(params: &CategoriesQuery) -> String {
    let mut badges = Vec::new();
    let active = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
            .map(str::to_string)
    };
    if let Some(country) = active(&params.country) {
        let rest = CategoriesQuery {
            country: None,
            ..params.clone()
        };
        badges.push((format!("Country: {}", country), rest));
    }
    if let Some(bias) = active(&params.bias) {
        let rest = CategoriesQuery {
            bias: None,
            ..params.clone()
        };
        badges.push((format!("Bias: {}", bias), rest));
    }
    if let Some(q) = active(&params.q) {
        let rest = CategoriesQuery {
            q: None,
            ..params.clone()
        };
        badges.push((format!("Search: \"{}\"", q), rest));
    }
    if badges.is_empty() {
        return String::new();
    }
    let badges: String = badges
        .into_iter()
        .map(|(label, rest)| {
            format!(
                r#"<span class="badge secondary badge-sm active-filter">{} <a href="{}" aria-label="Remove filter">×</a></span>"#,
                escape(&label),
                escape(&Route::Categories(rest).href())
            )
        })
        .collect();
    format!(
        r#"<div class="row active-filters"><span class="muted small">Active filters:</span>{}</div>"#,
        badges
    )
}

pub fn categories(
    categories: &[Category],
    selected: Option<&Category>,
    params: &CategoriesQuery,
    records: &[ArticleRecord],
) -> String {
    let selected_id = selected.map(|c| c.id).unwrap_or_default();
    let tabs: String = categories
        .iter()
        .map(|category| {
            let class = if category.id == selected_id { "button" } else { "button outline" };
            format!(
                r#"<a class="{}" href="{}"><div>{}</div><div class="small">{} articles</div></a>"#,
                class,
                escape(&Route::Categories(params.with_category(category.id)).href()),
                category.name,
                category.count
            )
        })
        .collect();
    let listing = if records.is_empty() {
        empty_state().to_string()
    } else {
        grid(records)
    };
    let body = format!(
        r#"<section class="container">
  <h1>News Categories</h1>
  <p class="muted">Explore news articles with AI-powered bias analysis</p>
  <div class="row category-tabs">{tabs}</div>
  <form class="card filters" action="{action}" method="get">
    <h3>Filters</h3>
    <input type="hidden" name="category" value="{category}">
    <input type="search" name="q" value="{q}" placeholder="Search articles...">
    <select name="country" aria-label="Country">{country_options}</select>
    <select name="bias" aria-label="Bias">{bias_options}</select>
    <button class="button" type="submit">Apply</button>
    <a class="button outline" href="{clear}">Clear Filters</a>
  </form>
  {active}
  <div class="row-between">
    <h2>{name} News</h2>
    <span class="muted count">{count} articles found</span>
  </div>
  {listing}
</section>"#,
        tabs = tabs,
        action = routes::CATEGORIES,
        category = escape(selected_id),
        q = escape(params.q.as_deref().unwrap_or("")),
        country_options = options(
            choices(BROWSE_COUNTRIES),
            params.country.as_deref().unwrap_or(ALL)
        ),
        bias_options = options(
            bias_choices("All Bias Levels"),
            params.bias.as_deref().unwrap_or(ALL)
        ),
        clear = escape(&Route::Categories(params.cleared()).href()),
        active = active_filters(params),
        name = selected.map(|c| c.name).unwrap_or("All"),
        count = records.len(),
        listing = listing,
    );
    page("News Categories", Nav::Categories, None, &body)
}

pub fn article(detail: &ArticleDetail) -> String {
    let record = &detail.record;
    let date = record
        .published
        .map(|d| format!("<span>📅 {}</span>", d.format("%B %-d, %Y")))
        .unwrap_or_default();
    let author = detail
        .author
        .as_deref()
        .map(|a| format!("<span>By {}</span>", escape(a)))
        .unwrap_or_default();
    let read_time = detail
        .read_time
        .as_deref()
        .map(|t| format!("<span>{}</span>", escape(t)))
        .unwrap_or_default();
    let paragraphs: String = detail
        .paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();
    let analysis = detail.analysis.as_ref().map(bias_indicator).unwrap_or_default();
    let key_points = if detail.key_points.is_empty() {
        String::new()
    } else {
        let items: String = detail
            .key_points
            .iter()
            .map(|k| format!("<li>{}</li>", escape(k)))
            .collect();
        format!(r#"<section class="card key-points"><h3>Key Points</h3><ul>{}</ul></section>"#, items)
    };
    let related = if detail.related.is_empty() {
        String::new()
    } else {
        let items: String = detail
            .related
            .iter()
            .map(|t| format!(r#"<div class="related-item">{}</div>"#, escape(t)))
            .collect();
        format!(r#"<section class="card related"><h3>Related Articles</h3>{}</section>"#, items)
    };
    let body = format!(
        r#"<section class="container">
  <a class="button outline" href="{back}">← Back to Categories</a>
  <div class="article-layout">
    <article class="card article-body">
      <header>
        <div class="row-between"><h1>{title}</h1>{badge}</div>
        <p class="muted lead">{summary}</p>
        <div class="row meta muted small">{flag}<span>{source}</span>{date}{author}{read_time}<span>🔗 Original Source</span></div>
      </header>
      {paragraphs}
    </article>
    <aside class="sidebar">
      {analysis}
      {key_points}
      {related}
    </aside>
  </div>
</section>"#,
        back = Route::Categories(CategoriesQuery::default()).href(),
        title = escape(&record.title),
        badge = bias_badge(record.bias, BadgeSize::Medium),
        summary = escape(&record.summary),
        flag = flag(&record.country),
        source = escape(&record.source),
        date = date,
        author = author,
        read_time = read_time,
        paragraphs = paragraphs,
        analysis = analysis,
        key_points = key_points,
        related = related,
    );
    page(&record.title, Nav::None, None, &body)
}

pub fn about() -> String {
    const STEPS: &[(&str, &str, &str)] = &[
        ("01", "Data Collection", "We aggregate news articles from trusted sources worldwide using automated systems."),
        ("02", "AI Analysis", "Our GPT-powered NLP models analyze language patterns, tone, and framing to detect bias."),
        ("03", "Bias Classification", "Articles are classified by political leaning and emotional sentiment with explanations."),
        ("04", "User Interface", "Clear visualizations help users understand different perspectives on the same story."),
    ];
    const TEAM: &[(&str, &str, &str, &str)] = &[
        ("🧑‍💻", "Alex Chen", "AI/ML Engineer", "Specialized in natural language processing and bias detection algorithms"),
        ("👩‍🔬", "Maria Rodriguez", "Data Scientist", "Expert in news analysis and sentiment classification systems"),
        ("👨‍💻", "James Kim", "Full-Stack Developer", "Focused on creating intuitive user experiences for complex data"),
    ];
    const VALUES: &[(&str, &str)] = &[
        ("Transparency", "We explain how our AI makes decisions and provide clear reasoning for bias classifications"),
        ("Fairness", "Our goal is to present all perspectives equally, helping users form their own informed opinions"),
        ("Global Awareness", "We analyze news from diverse international sources to provide comprehensive coverage"),
    ];
    let steps: String = STEPS
        .iter()
        .map(|(step, title, description)| {
            format!(
                r#"<div class="card"><span class="badge secondary badge-sm">Step {}</span><h3>{}</h3><p class="muted">{}</p></div>"#,
                step, title, description
            )
        })
        .collect();
    let team: String = TEAM
        .iter()
        .map(|(avatar, name, role, description)| {
            format!(
                r#"<div class="card member"><div class="avatar">{}</div><h3>{}</h3><span class="badge secondary badge-sm">{}</span><p class="muted">{}</p></div>"#,
                avatar, name, role, description
            )
        })
        .collect();
    let values: String = VALUES
        .iter()
        .map(|(title, description)| format!("<div><h3>{}</h3><p class=\"muted\">{}</p></div>", title, description))
        .collect();
    let body = format!(
        r#"<section class="hero">
  <div class="container">
    <h1>About BiasLens</h1>
    <p class="muted">We're on a mission to help people uncover bias in news media and get a complete picture of important stories through the power of artificial intelligence.</p>
  </div>
</section>
<section class="container">
  <div class="card"><h2>🎯 Our Mission</h2><p class="muted">In an era of information overload and polarized media, we believe everyone deserves access to unbiased news analysis. BiasLens empowers readers to see beyond the spin and understand the full spectrum of perspectives on important issues.</p></div>
</section>
<section class="container">
  <h2>How It Works</h2>
  <p class="muted">Our advanced AI system combines cutting-edge NLP technology with GPT models to provide comprehensive bias analysis</p>
  <div class="grid">{steps}</div>
</section>
<section class="container">
  <div class="card">
    <h2>Powered by Advanced AI</h2>
    <p class="muted">We leverage state-of-the-art technology to provide accurate, reliable bias detection</p>
    <div class="grid">
      <div><h3>GPT Models</h3><p class="muted">Advanced language models for nuanced text analysis</p></div>
      <div><h3>NLP Pipeline</h3><p class="muted">Custom natural language processing for bias detection</p></div>
      <div><h3>Global Sources</h3><p class="muted">Multilingual analysis across international news outlets</p></div>
    </div>
  </div>
</section>
<section class="container">
  <h2>Meet Our Team</h2>
  <p class="muted">Three students passionate about AI, ethics, and journalism</p>
  <div class="grid">{team}</div>
</section>
<section class="container">
  <div class="card"><h2>Our Values</h2><div class="grid">{values}</div></div>
</section>"#,
        steps = steps,
        team = team,
        values = values,
    );
    page("About", Nav::About, None, &body)
}

/// Acknowledgment shown after a contact message is accepted.
pub fn contact_toast() -> Toast {
    Toast {
        title: "Message sent!".to_string(),
        description: "Thank you for your feedback. We'll get back to you soon.".to_string(),
    }
}

fn field_error(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .filter(|e| e.field == field)
        .map(|e| format!(r#"<p class="field-error">{}</p>"#, escape(&e.message)))
        .collect()
}

pub fn contact(form: &ContactForm, errors: &[FieldError], toast: Option<&Toast>) -> String {
    const LINKS: &[(&str, &str, &str)] = &[
        ("GitHub", "https://github.com/biaslens", "Check out our open source code"),
        ("LinkedIn", "https://linkedin.com/company/biaslens", "Connect with our team"),
        ("Email", "mailto:team@biaslens.com", "team@biaslens.com"),
    ];
    const FAQ: &[(&str, &str)] = &[
        ("How accurate is the bias detection?", "Our AI models achieve 85%+ accuracy in bias classification, constantly improving through user feedback."),
        ("Can I suggest new features?", "Absolutely! We welcome feature suggestions and actively consider user feedback for our roadmap."),
        ("Is BiasLens free to use?", "Yes, BiasLens is completely free. We believe bias detection should be accessible to everyone."),
    ];
    let feedback_options = options(
        std::iter::once(("", "Select feedback type..."))
            .chain(FeedbackType::ALL.iter().map(|t| (t.value(), t.label()))),
        &form.feedback_type,
    );
    let links: String = LINKS
        .iter()
        .map(|(name, url, description)| {
            format!(
                r#"<a class="contact-link" href="{}" target="_blank" rel="noopener noreferrer"><h3>{}</h3><p class="muted">{}</p></a>"#,
                url, name, description
            )
        })
        .collect();
    let faq: String = FAQ
        .iter()
        .map(|(q, a)| format!("<div><h4>{}</h4><p class=\"muted small\">{}</p></div>", q, a))
        .collect();
    let body = format!(
        r#"<section class="container">
  <h1>Get in Touch</h1>
  <p class="muted">Have questions, feedback, or ideas? We'd love to hear from you. Our team is always looking to improve BiasLens.</p>
  <div class="grid">
    <div class="card">
      <h2>Send us a message</h2>
      <p class="muted">Fill out the form below and we'll get back to you as soon as possible.</p>
      <form class="contact-form" action="{action}" method="post">
        <label for="name">Name *</label>
        <input id="name" name="name" type="text" value="{name}" placeholder="Your full name" required>
        {name_error}
        <label for="email">Email *</label>
        <input id="email" name="email" type="email" value="{email}" placeholder="your.email@example.com" required>
        {email_error}
        <label for="feedback_type">Feedback Type</label>
        <select id="feedback_type" name="feedback_type">{feedback_options}</select>
        {feedback_error}
        <label for="message">Message *</label>
        <textarea id="message" name="message" rows="6" placeholder="Tell us what's on your mind..." required>{message}</textarea>
        {message_error}
        <button class="button" type="submit">Send Message</button>
      </form>
    </div>
    <div>
      <div class="card"><h2>Contact Information</h2><p class="muted">Reach out to us through any of these channels</p>{links}</div>
      <div class="card"><h2>Quick Help</h2><p class="muted">Common questions and useful information</p>{faq}</div>
      <div class="card"><h3>Response Time</h3><p class="muted">We typically respond to messages within 24-48 hours. For urgent issues, please mention "URGENT" in your subject line.</p></div>
    </div>
  </div>
  <div class="card team-contact"><h3>✉️ Direct Team Contact</h3><p class="muted">For partnerships, press inquiries, or technical questions</p><span class="badge secondary badge-md">team@biaslens.com</span></div>
</section>"#,
        action = routes::CONTACT,
        name = escape(&form.name),
        name_error = field_error(errors, "name"),
        email = escape(&form.email),
        email_error = field_error(errors, "email"),
        feedback_options = feedback_options,
        feedback_error = field_error(errors, "feedback_type"),
        message = escape(&form.message),
        message_error = field_error(errors, "message"),
        links = links,
        faq = faq,
    );
    page("Contact", Nav::Contact, toast, &body)
}

pub fn error(status: u16, title: &str, detail: &str) -> String {
    let body = format!(
        r#"<section class="container empty-state">
  <h1>{status}</h1>
  <h2>{title}</h2>
  <p class="muted">{detail}</p>
  <a class="button" href="/">Return to Home</a>
</section>"#,
        status = status,
        title = escape(title),
        detail = escape(detail),
    );
    page(title, Nav::None, None, &body)
}
