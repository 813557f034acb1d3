use crate::storage::BlobStore;
use crate::tui::app::{App, InputMode};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Handle mouse events
pub fn handle_mouse<B: BlobStore>(app: &mut App<B>, mouse_event: MouseEvent) {
    if app.input_mode != InputMode::Normal {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_mouse_click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollDown => app.next(),
        MouseEventKind::ScrollUp => app.previous(),
        _ => {}
    }
}
