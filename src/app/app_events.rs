use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::app_state::{App, Focus, SCROLL_STEP, ScrollSource};
use super::mouse_click;
use crate::layout::{Region, region_at};

impl App {
    /// Block for the next terminal event and dispatch it
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::Resize(_, height) => self.terminal_height = height,
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::SearchInput => self.handle_search_key(key),
            Focus::Feed => self.handle_feed_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if the key was consumed.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Help popup swallows everything except its close keys
        if self.help.visible {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                self.help.close();
            }
            return true;
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::F(2) => {
                self.toggle_background_services();
                true
            }
            KeyCode::Tab if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.switch_focus();
                true
            }
            KeyCode::BackTab => {
                self.switch_focus();
                true
            }
            _ => false,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchInput => Focus::Feed,
            Focus::Feed => Focus::SearchInput,
        };
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.focus = Focus::Feed,
            KeyCode::Down => self.next_item(),
            KeyCode::Up => self.prev_item(),
            _ => {
                self.input.input(key);
            }
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Char('n') | KeyCode::Down => self.next_item(),
            KeyCode::Char('k') | KeyCode::Char('p') | KeyCode::Up => self.prev_item(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('b') => self.toggle_background_services(),
            KeyCode::Char('/') | KeyCode::Char('i') => self.focus = Focus::SearchInput,
            KeyCode::Char('?') => self.help.toggle(),
            _ => {}
        }
    }

    /// Handle mouse wheel and click events
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown if !self.help.visible => {
                self.scroll_down(SCROLL_STEP, scroll_source(region));
            }
            MouseEventKind::ScrollUp if !self.help.visible => {
                self.scroll_up(SCROLL_STEP, scroll_source(region));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse.row);
            }
            _ => {}
        }
    }
}

fn scroll_source(region: Option<Region>) -> ScrollSource {
    match region {
        Some(Region::FeedPane) => ScrollSource::Container,
        _ => ScrollSource::Window,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
