use crate::storage::BlobStore;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle Form mode key events
/// Returns true if the application should quit
pub fn handle_form_mode<B: BlobStore>(app: &mut App<B>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.submit_form(),
            KeyCode::Char('c') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Enter => {
            // Line break in landmarks/notes, submit elsewhere
            if !app.newline() {
                app.submit_form();
            }
        }
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }

    false
}
