//! HTML to plain-text flattening.

use scraper::{Html, Node};

/// Collapse a document into its visible text: every text node trimmed and
/// joined with single spaces, skipping script and style content.
pub fn to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => matches!(el.name(), "script" | "style"),
            _ => false,
        });
        if skipped {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

// ── Tests ──
