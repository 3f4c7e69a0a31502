//! HTML rendering of the card list
//!
//! Every text field is escaped; each call produces the full replacement markup.

use crate::feed::FeedController;

use super::card::Card;

/// Escape `& < > " '` for safe inclusion in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for a single card
pub fn render_card(card: &Card<'_>) -> String {
    let class = if card.selected { "card selected" } else { "card" };
    format!(
        concat!(
            "<article class=\"{}\" data-index=\"{}\">\n",
            "  <div class=\"thumb\">{}</div>\n",
            "  <div class=\"meta\">\n",
            "    <div class=\"type\">{}</div>\n",
            "    <div class=\"title\">{}</div>\n",
            "    <div class=\"desc\">{}</div>\n",
            "  </div>\n",
            "</article>\n",
        ),
        class,
        card.index,
        escape_html(&card.glyph.to_string()),
        escape_html(card.kind.label()),
        escape_html(card.title),
        escape_html(card.description),
    )
}

/// Markup for a whole list of cards
pub fn render_cards(cards: &[Card<'_>]) -> String {
    cards.iter().map(render_card).collect()
}

/// Standalone document with the device code, the visible cards and the status line
pub fn render_page(feed: &FeedController, device_code: Option<&str>) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Suggestions</title></head>\n<body>\n");
    if let Some(code) = device_code {
        page.push_str(&format!(
            "<header><span id=\"deviceCode\">Code: {}</span></header>\n",
            escape_html(code)
        ));
    }
    page.push_str("<main>\n<section id=\"suggestions\">\n");
    page.push_str(&render_cards(&feed.cards()));
    page.push_str("</section>\n");
    page.push_str(&format!(
        "<div id=\"loader\">{}</div>\n",
        escape_html(feed.status().message())
    ));
    page.push_str("</main>\n</body>\n</html>\n");
    page
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod html_tests;
