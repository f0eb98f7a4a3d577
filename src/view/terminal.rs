//! Plain text painting of a page
//!
//! The CLI prints pages with this module. HTML summaries are converted to
//! text, hidden regions are skipped.

use super::{Notice, Page, ShowCard};

/// Converts an HTML summary into a single trimmed line of text.
pub fn summary_text(summary: Option<&str>) -> String {
    summary
        .map(|s| nanohtml2text::html2text(s).trim().to_string())
        .unwrap_or_default()
}

fn paint_card(lines: &mut Vec<String>, card: &ShowCard) {
    lines.push(format!("[{}] {}", card.handle.index() + 1, card.name));
    lines.push(format!("    Image: {}", card.image_url));

    let summary = summary_text(card.summary.as_deref());
    lines.extend(summary.lines().map(|line| format!("    {}", line)));

    lines.push(format!("    ({})", card.action_label));
}

/// Paints the whole page as text.
pub fn paint(page: &Page) -> String {
    let mut lines = Vec::new();

    if let Some(Notice::Error(message)) = &page.notice {
        lines.push(format!("Error: {}", message));
        lines.push(String::new());
    }

    lines.push("=== Shows ===".to_string());
    if page.results.cards().is_empty() {
        lines.push("No shows to display.".to_string());
    }
    for card in page.results.cards() {
        paint_card(&mut lines, card);
    }

    if page.episodes.is_visible() {
        lines.push(String::new());
        lines.push("=== Episodes ===".to_string());
        lines.extend(
            page.episodes
                .items()
                .iter()
                .map(|item| format!("  - {}", item.text)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
