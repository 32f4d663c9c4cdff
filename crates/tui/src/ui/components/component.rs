//! Component system for the navigation surface.
//!
//! Components are self-contained UI elements that handle their own events and
//! render themselves into a provided `Rect`, reporting side effects back to
//! the runtime as [`Effect`]s instead of performing them.

use crossterm::event::{KeyEvent, MouseEvent};
use foodtuck_types::Effect;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with event handling and rendering.
///
/// # Lifecycle
///
/// 1. Event handling: `handle_key_events()` when focused, `handle_mouse_events()`
///    for clicks that may land inside the component
/// 2. Rendering: `render()` draws into the given area and records any areas
///    needed for hit testing in the component's state on `App`
/// 3. Hints: `get_hint_spans()` describes the keys available while focused
pub trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Implementations ignore events outside the areas
    /// they recorded during the last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement and recording hit-test areas.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
