/// Keybindings shown in the help popup, as (keys, description)
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Enter", "Search for the typed text (empty shows everything)"),
    ("Tab / Shift+Tab", "Switch focus between search and feed"),
    ("j / Down / n", "Select next suggestion"),
    ("k / Up / p", "Select previous suggestion"),
    ("PgDn / PgUp", "Scroll the feed half a page"),
    ("g / G", "Jump to top / bottom"),
    ("b / F2", "Toggle background services"),
    ("/", "Focus the search field"),
    ("Mouse", "Click cards and buttons, wheel to scroll"),
    ("F1 / ?", "Toggle this help"),
    ("q / Esc", "Quit"),
];
