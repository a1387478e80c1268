use crate::app::{App, FilterField};
use crate::form::FormAction;
use crate::overlay::OverlayEvent;
use crate::route::Route;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Text-entry overlays take every key first
    if app.add_overlay.is_open() {
        handle_form_key(app, key);
        return;
    }
    if app.filter_overlay.is_open() {
        handle_filter_key(app, key);
        return;
    }

    // If help is showing, any key closes it
    if app.help.is_open() {
        app.help.close();
        return;
    }
    if key.code == KeyCode::Char('?') {
        app.help.open();
        return;
    }

    if app.trailer.is_open() {
        handle_trailer_key(app, key);
        return;
    }

    match app.route {
        Route::Catalog => handle_list_key(app, key),
        Route::Movie(_) => handle_detail_key(app, key),
    }
}

/// Clicks outside the trailer overlay close it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.trailer.is_open() {
        return;
    }
    let content = ui::trailer::area(app.viewport);
    if !content.contains(Position::new(mouse.column, mouse.row)) {
        app.trailer.handle(OverlayEvent::OutsideClick);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.list_next(),
        KeyCode::Up | KeyCode::Char('k') => app.list_prev(),
        KeyCode::PageDown => app.list_page_down(),
        KeyCode::PageUp => app.list_page_up(),
        KeyCode::Char('g') => app.list_first(),
        KeyCode::Char('G') => app.list_last(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('f') | KeyCode::Char('/') => {
            app.filter_focus = FilterField::Title;
            app.filter_overlay.open();
        }
        KeyCode::Char('a') => {
            app.add_overlay.open();
        }
        KeyCode::Esc => app.clear_filter(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.filter_overlay.close();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.filter_focus = app.filter_focus.toggle();
        }
        KeyCode::Delete => app.clear_filter(),
        _ => match app.filter_focus {
            FilterField::Title => match key.code {
                KeyCode::Backspace => app.filter_pop(),
                KeyCode::Char(c) => app.filter_push(c),
                _ => {}
            },
            FilterField::Rating => match key.code {
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => app.filter_raise_rating(),
                KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => app.filter_lower_rating(),
                _ => {}
            },
        },
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match app.form.handle_key(key) {
        Some(FormAction::Submit) => {
            app.submit_draft();
        }
        Some(FormAction::Cancel) => {
            app.add_overlay.close();
        }
        None => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('b') | KeyCode::Backspace => {
            app.back_to_list();
        }
        KeyCode::Enter | KeyCode::Char('t') => app.watch_trailer(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::PageDown => app.scroll_page_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        _ => {}
    }
}

fn handle_trailer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => {
            app.trailer.handle(OverlayEvent::CloseControl);
        }
        KeyCode::Char('o') | KeyCode::Enter => app.play_trailer_externally(),
        KeyCode::Char('y') => app.copy_trailer_link(),
        _ => {}
    }
}
