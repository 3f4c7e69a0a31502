use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle of the given size centered in `frame_area`, shrunk to fit
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_shrinks_to_frame() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_centered_popup_respects_offset_area() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_popup(area, 10, 4), Rect::new(15, 8, 10, 4));
    }
}
