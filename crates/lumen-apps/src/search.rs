//! Search overlay: query dispatch and window content

use lumen_desktop::{ShellEngine, WindowKey};
use crate::launcher::open_app;
use crate::markup::escape;
use crate::menu::MenuAction;

/// Where a submitted query should go
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchDispatch {
    /// Blank input; the overlay flashes instead of navigating
    Empty,
    /// Looks like a URL already; open it directly
    Url(String),
    /// Free text; hand to the web search engine
    Web(String),
}

/// Classify a submitted query the way the overlay dispatches it
pub fn classify_query(query: &str) -> SearchDispatch {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        SearchDispatch::Empty
    } else if trimmed.contains("https://") || trimmed.contains("http://") {
        SearchDispatch::Url(trimmed.to_string())
    } else {
        SearchDispatch::Web(trimmed.to_string())
    }
}

/// Case-insensitive substring filter over searchable labels, preserving
/// input order
pub fn filter_entries<'a>(entries: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|e| e.to_lowercase().contains(&needle))
        .map(|e| e.as_str())
        .collect()
}

/// Build the search overlay content
pub fn markup() -> String {
    concat!(
        "<div class=\"search-overlay\">",
        "<input id=\"search-input\" type=\"search\" placeholder=\"Search...\">",
        "<button data-search=\"web\">Web Search</button>",
        "<ul id=\"search-results\"></ul>",
        "</div>"
    )
    .to_string()
}

/// Build the result list for a filtered set of labels
pub fn results_markup(matches: &[&str]) -> String {
    let mut out = String::from("<ul id=\"search-results\">");
    for label in matches {
        out.push_str(&format!("<li>{}</li>", escape(label)));
    }
    out.push_str("</ul>");
    out
}

/// Open (or focus) the search window
pub fn open(shell: &mut ShellEngine, now_ms: f64) -> WindowKey {
    open_app(shell, MenuAction::Search, markup(), now_ms)
}
