//! Color palette shared by the terminal renderers

pub mod header {
    use ratatui::style::Color;

    pub const TITLE: Color = Color::Cyan;
    pub const DEVICE_CODE: Color = Color::Yellow;
}

pub mod search {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const BUTTON: Color = Color::Cyan;
}

pub mod feed {
    use ratatui::style::Color;

    use crate::feed::SuggestionKind;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const GLYPH_FG: Color = Color::Black;
    pub const TYPE_LABEL: Color = Color::Gray;
    pub const TITLE: Color = Color::White;
    pub const DESCRIPTION: Color = Color::DarkGray;
    pub const SELECTED_BG: Color = Color::Rgb(40, 44, 60);
    pub const SELECTED_MARKER: Color = Color::Cyan;
    pub const NO_MATCHES: Color = Color::DarkGray;

    pub fn glyph_bg(kind: SuggestionKind) -> Color {
        match kind {
            SuggestionKind::Video => Color::Red,
            SuggestionKind::Music => Color::Magenta,
            SuggestionKind::Image => Color::Green,
            SuggestionKind::Article => Color::Blue,
            SuggestionKind::Wikipedia => Color::Gray,
            SuggestionKind::History => Color::Yellow,
        }
    }
}

pub mod nav {
    use ratatui::style::Color;

    pub const BUTTON: Color = Color::Cyan;
    pub const TOGGLE_ON: Color = Color::Green;
    pub const TOGGLE_OFF: Color = Color::Red;
}

pub mod status {
    use ratatui::style::Color;

    pub const NORMAL: Color = Color::Gray;
    pub const WARNING: Color = Color::Yellow;
}

pub mod help {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::White;
}
