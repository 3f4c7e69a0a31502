use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::help_content::HELP_ENTRIES;
use crate::theme;
use crate::widgets::popup;

const KEY_COLUMN_WIDTH: usize = 18;
const POPUP_WIDTH: u16 = 72;

/// Render the help popup centered in `frame_area`; returns its area for hit testing
pub fn render_popup(frame: &mut Frame, frame_area: Rect) -> Rect {
    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", keys, width = KEY_COLUMN_WIDTH),
                    Style::default()
                        .fg(theme::help::KEY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ])
        })
        .collect();

    let height = HELP_ENTRIES.len() as u16 + 2;
    let area = popup::centered_popup(frame_area, POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Keybindings ")
        .title_bottom(Line::from(" F1/Esc to close ").right_aligned())
        .border_style(Style::default().fg(theme::help::BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
    area
}
