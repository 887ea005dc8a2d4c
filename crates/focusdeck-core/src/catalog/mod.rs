//! Static catalogs: books, AI tools, games.
//!
//! Pure data tables rendered verbatim into grid markup. No core logic
//! depends on their content beyond "render all entries"; activation either
//! opens the external link or (for games) surfaces a notification.

mod data;

pub use data::{ai_tools, books, games};

use crate::panels::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTool {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub use_for: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub features: &'static [&'static str],
}

/// Render the catalog grid for a panel. Panels without a catalog render
/// an empty grid.
pub fn render_grid(panel: Panel) -> String {
    match panel {
        Panel::StudyLibrary => render_library(),
        Panel::AiTools => render_ai_grid(),
        Panel::GamingZone => render_games_grid(),
        _ => String::new(),
    }
}

pub fn render_library() -> String {
    books()
        .iter()
        .map(|b| {
            format!(
                "<div class=\"book-card\" data-url=\"{}\">{} <b>{}</b> by {} [{} / {}] - {}</div>",
                b.url, b.icon, b.title, b.author, b.category, b.level, b.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_ai_grid() -> String {
    ai_tools()
        .iter()
        .map(|t| {
            format!(
                "<div class=\"ai-card\" data-url=\"{}\">{} <b>{}</b> - {} Use for: {} [{}]</div>",
                t.url,
                t.icon,
                t.name,
                t.description,
                t.use_for,
                t.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_games_grid() -> String {
    games()
        .iter()
        .map(|g| {
            format!(
                "<div class=\"game-card\">{} <b>{}</b> ({}) - {} [{}]</div>",
                g.icon,
                g.name,
                g.category,
                g.description,
                g.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Open a catalog entry's external link with the platform handler.
pub fn open_link(url: &str) -> std::io::Result<()> {
    open::that(url)
}
