use crate::storage::BlobStore;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode<B: BlobStore>(app: &mut App<B>, key: KeyEvent) -> bool {
    app.message = None;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => app.show_help = false,
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Home | KeyCode::Char('g') => app.first(),
        KeyCode::End | KeyCode::Char('G') => app.last(),
        KeyCode::Char('J') | KeyCode::PageDown => app.scroll_detail_down(),
        KeyCode::Char('K') | KeyCode::PageUp => app.scroll_detail_up(),
        KeyCode::Char('a') | KeyCode::Char('c') => {
            app.show_help = false;
            app.open_form();
        }
        _ => {}
    }

    false
}
