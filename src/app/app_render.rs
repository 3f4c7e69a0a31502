use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app_state::{App, Focus};
use crate::feed::StatusLine;
use crate::help::help_popup_render;
use crate::render::Card;
use crate::theme;

pub const HEADER_HEIGHT: u16 = 1;
pub const SEARCH_HEIGHT: u16 = 3;
pub const NAV_BAR_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
const SEARCH_BUTTON_WIDTH: u16 = 10;
const PREV_LABEL: &str = "[◀ Prev]";
const NEXT_LABEL: &str = "[Next ▶]";
const MARKER_WIDTH: usize = 2;
const HELP_HINT: &str = "F1 help ";

impl App {
    /// Render the UI and record component regions for mouse handling
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.terminal_height = area.height;
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

        self.render_header(frame, layout[0]);
        self.render_search(frame, layout[1]);
        self.render_feed(frame, layout[2]);
        self.render_nav_bar(frame, layout[3]);
        self.render_status(frame, layout[4]);

        if self.help.visible {
            self.layout_regions.help_popup = Some(help_popup_render::render_popup(frame, area));
        }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        self.layout_regions.header = Some(area);

        let code_label = self
            .device_code()
            .map(|code| format!("Code: {} ", code))
            .unwrap_or_default();
        let [title_area, code_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(code_label.width() as u16),
        ])
        .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " Suggestions",
            Style::default()
                .fg(theme::header::TITLE)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        if !code_label.is_empty() {
            let code = Paragraph::new(Span::styled(
                code_label,
                Style::default().fg(theme::header::DEVICE_CODE),
            ));
            frame.render_widget(code, code_area);
        }
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, button_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(SEARCH_BUTTON_WIDTH)])
                .areas(area);
        self.layout_regions.search_input = Some(input_area);
        self.layout_regions.search_button = Some(button_area);

        let border_color = if self.focus == Focus::SearchInput {
            theme::search::BORDER_FOCUSED
        } else {
            theme::search::BORDER_UNFOCUSED
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(&self.input, input_area);

        let button = Paragraph::new(Span::styled(
            "Search",
            Style::default()
                .fg(theme::search::BUTTON)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::search::BUTTON)),
        );
        frame.render_widget(button, button_area);
    }

    fn render_feed(&mut self, frame: &mut Frame, area: Rect) {
        self.layout_regions.feed_pane = Some(area);

        let border_color = if self.focus == Focus::Feed {
            theme::feed::BORDER_FOCUSED
        } else {
            theme::feed::BORDER_UNFOCUSED
        };
        let title = match self.feed.active_query() {
            Some(query) => format!(
                " Matching \"{}\" ({}/{}) ",
                query,
                self.feed.visible_len(),
                self.feed.store().len()
            ),
            None => format!(" Feed ({}) ", self.feed.store().len()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        self.layout_regions.feed_content = Some(inner);
        let content_height = self.feed_content_height();
        self.feed_scroll.update_bounds(content_height, inner.height);

        let text_width = (inner.width as usize).saturating_sub(MARKER_WIDTH);
        let cards = self.feed.cards();
        let lines: Vec<Line> = if cards.is_empty() {
            match self.feed.active_query() {
                Some(query) => vec![Line::from(Span::styled(
                    format!("  No suggestions match \"{}\"", query),
                    Style::default().fg(theme::feed::NO_MATCHES),
                ))],
                None => Vec::new(),
            }
        } else {
            cards
                .iter()
                .flat_map(|card| card_lines(card, text_width))
                .collect()
        };

        let content = Paragraph::new(lines)
            .block(block)
            .scroll((self.feed_scroll.offset, 0));
        frame.render_widget(content, area);
    }

    fn render_nav_bar(&mut self, frame: &mut Frame, area: Rect) {
        let services_on = self.feed.background_services();
        let toggle_label = format!(
            "[{}] Background services",
            if services_on { "x" } else { " " }
        );
        let toggle_color = if services_on {
            theme::nav::TOGGLE_ON
        } else {
            theme::nav::TOGGLE_OFF
        };
        let button_style = Style::default()
            .fg(theme::nav::BUTTON)
            .add_modifier(Modifier::BOLD);

        let segments = [
            (" ", Style::default()),
            (PREV_LABEL, button_style),
            (" ", Style::default()),
            (NEXT_LABEL, button_style),
            ("   ", Style::default()),
            (toggle_label.as_str(), Style::default().fg(toggle_color)),
        ];

        let mut x = area.x;
        let mut spans = Vec::with_capacity(segments.len());
        for (idx, (text, style)) in segments.iter().enumerate() {
            let width = (text.width() as u16).min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height.min(1));
            match idx {
                1 => self.layout_regions.prev_button = Some(rect),
                3 => self.layout_regions.next_button = Some(rect),
                5 => self.layout_regions.services_toggle = Some(rect),
                _ => {}
            }
            x = x.saturating_add(width);
            spans.push(Span::styled(*text, *style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status(&mut self, frame: &mut Frame, area: Rect) {
        self.layout_regions.status_line = Some(area);

        let [message_area, hint_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(HELP_HINT.width() as u16),
        ])
        .areas(area);

        let status = self.feed.status();
        let color = match status {
            StatusLine::LoadBlocked | StatusLine::ServicesDisabled => theme::status::WARNING,
            _ => theme::status::NORMAL,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", status.message()),
                Style::default().fg(color),
            )),
            message_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                HELP_HINT,
                Style::default().fg(theme::status::NORMAL),
            )),
            hint_area,
        );
    }
}

/// The four rows of one card: badge and type, title, description, spacer
fn card_lines(card: &Card<'_>, text_width: usize) -> Vec<Line<'static>> {
    let (marker, base) = if card.selected {
        (
            Span::styled(
                "▌ ",
                Style::default().fg(theme::feed::SELECTED_MARKER),
            ),
            Style::default().bg(theme::feed::SELECTED_BG),
        )
    } else {
        (Span::raw("  "), Style::default())
    };

    let badge = Span::styled(
        format!(" {} ", card.glyph),
        Style::default()
            .fg(theme::feed::GLYPH_FG)
            .bg(theme::feed::glyph_bg(card.kind))
            .add_modifier(Modifier::BOLD),
    );
    let kind = Span::styled(
        format!(" {}", card.kind.label()),
        base.fg(theme::feed::TYPE_LABEL),
    );
    let title = Span::styled(
        truncate_to_width(card.title, text_width),
        base.fg(theme::feed::TITLE).add_modifier(Modifier::BOLD),
    );
    let description = Span::styled(
        truncate_to_width(card.description, text_width),
        base.fg(theme::feed::DESCRIPTION),
    );

    vec![
        Line::from(vec![marker.clone(), badge, kind]),
        Line::from(vec![marker.clone(), title]),
        Line::from(vec![marker, description]),
        Line::from(""),
    ]
}

/// Cut `text` to at most `max_width` display columns, ending with `…` when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
