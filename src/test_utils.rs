#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    pub const TEST_DEVICE_CODE: &str = "ABCD-EF23";
    pub const TEST_WIDTH: u16 = 80;
    pub const TEST_HEIGHT: u16 = 24;

    pub fn test_app() -> App {
        test_app_with(&Config::default())
    }

    pub fn test_app_with(config: &Config) -> App {
        App::with_device_code(config, TEST_DEVICE_CODE.to_string())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Render the app into a test terminal and return the screen as text
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    /// Render once at the default test size so layout regions and scroll bounds exist
    pub fn rendered_app() -> App {
        let mut app = test_app();
        render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
        app
    }

    /// Type text into the query field key by key
    pub fn type_query(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// A point inside `rect`, one column in from its left edge when possible
    pub fn point_in(rect: Option<Rect>) -> (u16, u16) {
        let rect = rect.expect("region was not rendered");
        (rect.x + rect.width.min(2) / 2, rect.y)
    }
}
