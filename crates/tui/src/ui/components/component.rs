//! Component trait for the terminal host.
//!
//! Components own only local view behavior. They read and mutate the shared
//! [`App`] and report navigation requests back as [`Effect`]s, which the
//! runtime hands to the routing collaborator.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use techevents_types::Effect;

use crate::app::App;

pub(crate) trait Component {
    /// Handle a key press. Unhandled keys return no effects.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Coordinates are absolute terminal cells.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Hints shown in the footer while this component is visible.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
