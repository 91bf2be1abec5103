//! Key handling for the demo.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Map one key event onto the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.request_quit();
        return;
    }

    // The detail screen swallows everything except dismissal.
    if app.detail().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            app.close_detail();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.back(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(ch) => app.push_query_char(ch),
        _ => {}
    }
}
