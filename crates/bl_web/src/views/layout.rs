use super::html::escape;
use crate::routes::Route;

pub const SITE_NAME: &str = "BiasLens";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Categories,
    About,
    Contact,
    None,
}

/// Transient acknowledgment shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

const STYLE: &str = r#"
:root { --left: #2563eb; --right: #dc2626; --centre: #7c3aed; --muted: #64748b; --border: #e2e8f0; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #0f172a; background: #f8fafc; }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.site-header { background: #fff; border-bottom: 1px solid var(--border); }
.site-header nav { display: flex; gap: 1.5rem; align-items: center; height: 4rem; }
.site-header .brand { font-weight: 700; font-size: 1.25rem; text-decoration: none; margin-right: auto; }
.site-header a.active { font-weight: 600; text-decoration: underline; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border: 1px solid var(--border); border-radius: 0.75rem; padding: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.row, .meta { display: flex; gap: 0.5rem; align-items: center; }
.row-between { display: flex; justify-content: space-between; align-items: center; gap: 0.5rem; }
.muted { color: var(--muted); }
.small { font-size: 0.8rem; }
.badge { display: inline-block; border-radius: 999px; color: #fff; font-weight: 500; white-space: nowrap; }
.badge-sm { font-size: 0.75rem; padding: 0.25rem 0.5rem; }
.badge-md { font-size: 0.875rem; padding: 0.5rem 0.75rem; }
.badge.secondary { background: #e2e8f0; color: #0f172a; }
.bias-left { background: var(--left); }
.bias-right { background: var(--right); }
.bias-centre { background: var(--centre); }
.button { display: inline-block; padding: 0.5rem 1rem; border-radius: 0.5rem; background: #0f172a; color: #fff; text-decoration: none; border: 1px solid #0f172a; cursor: pointer; }
.button.outline { background: #fff; color: #0f172a; }
.button.wide { text-align: center; }
.progress { height: 0.5rem; background: var(--border); border-radius: 999px; overflow: hidden; }
.progress-bar { height: 100%; background: #0f172a; }
.positive { color: #16a34a; } .neutral { color: #2563eb; } .negative { color: #dc2626; }
.trend-up { color: #22c55e; } .trend-down { color: #ef4444; } .trend-flat { color: #6b7280; }
.explanation { background: #f1f5f9; padding: 0.75rem; border-radius: 0.5rem; font-size: 0.8rem; }
.filters { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; padding: 1rem 0; }
.empty-state { text-align: center; padding: 3rem 0; }
.empty-icon { font-size: 3rem; }
.toast { background: #0f172a; color: #fff; padding: 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.field-error { color: #dc2626; font-size: 0.8rem; }
.hero { padding: 5rem 0; text-align: center; background: linear-gradient(135deg, #e0e7ff, #f8fafc); }
section { padding: 2rem 0; }
"#;

fn nav_link(route: Route, label: &str, nav: Nav, active: Nav) -> String {
    let class = if nav == active { r#" class="active""# } else { "" };
    format!(r#"<a href="{}"{}>{}</a>"#, route.href(), class, label)
}

fn toast_html(toast: &Toast) -> String {
    format!(
        r#"<div class="toast" role="status"><strong>{}</strong><p>{}</p></div>"#,
        escape(&toast.title),
        escape(&toast.description)
    )
}

/// Wraps page content in the document shell and site navigation.
pub fn page(title: &str, active: Nav, toast: Option<&Toast>, body: &str) -> String {
    let nav = [
        nav_link(Route::Home, "Home", Nav::Home, active),
        nav_link(
            Route::Categories(Default::default()),
            "Categories",
            Nav::Categories,
            active,
        ),
        nav_link(Route::About, "About", Nav::About, active),
        nav_link(Route::Contact, "Contact", Nav::Contact, active),
    ]
    .concat();
    let toast = toast.map(toast_html).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<style>{style}</style>
</head>
<body>
<header class="site-header"><nav class="container"><a class="brand" href="/">{site}</a>{nav}</nav></header>
<main>
<div class="container">{toast}</div>
{body}
</main>
<footer class="container muted small"><p>&copy; {site}. Bias analysis shown here is illustrative.</p></footer>
</body>
</html>"#,
        title = escape(title),
        site = SITE_NAME,
        style = STYLE,
        nav = nav,
        toast = toast,
        body = body,
    )
}
