//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use super::app::{App, Mode};
use super::ui::{hit_test, Hit};

/// Poll for and handle events with a timeout.
///
/// `area` is the full terminal area the last frame was drawn into; mouse
/// positions are resolved against it.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration, area: Rect) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, key);
                return Ok(true);
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(app, mouse, area);
                return Ok(true);
            }
            Event::Resize(..) => return Ok(true),
            _ => {}
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Move => handle_move_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_navigation(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageUp => app.move_selection(-20),
        KeyCode::PageDown => app.move_selection(20),
        KeyCode::Right | KeyCode::Char('l') => app.expand_selected(),
        KeyCode::Left | KeyCode::Char('h') => app.collapse_selected(),
        KeyCode::Char(' ') => app.toggle_selected(),
        _ => return false,
    }
    true
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if handle_navigation(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            app.toggle_selected();
        }

        // Actions
        KeyCode::Char('a') | KeyCode::Char('+') | KeyCode::Insert => {
            app.add_child();
        }
        KeyCode::Char('d') | KeyCode::Char('-') | KeyCode::Delete => {
            app.remove_selected();
        }
        KeyCode::Char('m') => {
            app.start_move();
        }

        // View
        KeyCode::Char('o') => {
            app.show_order_panel = !app.show_order_panel;
        }
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_move_mode(app: &mut App, key: KeyEvent) {
    if handle_navigation(app, key) {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('m') => app.finish_move(),
        KeyCode::Esc | KeyCode::Char('q') => app.cancel_move(),
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

/// Handle a single mouse event against the layout of `area`.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.mode == Mode::Help {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.mode = Mode::Normal;
        }
        return;
    }

    let hit = hit_test(app, area, mouse.column, mouse.row);

    if app.mode == Mode::Move {
        handle_move_mouse(app, mouse, hit);
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(Hit::Toggle(node)) => {
                app.toggle_collapse(node);
            }
            Some(Hit::Row(node)) => {
                app.select(node);
                app.pressed = Some(node);
            }
            Some(Hit::OrderItem(node)) => app.select(node),
            Some(Hit::AddButton) => app.add_child(),
            Some(Hit::RemoveButton) => {
                if app.can_remove() {
                    app.remove_selected();
                }
            }
            None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_none() {
                match app.pressed {
                    Some(node) if node != app.root => {
                        app.begin_drag(node);
                    }
                    _ => return,
                }
            }
            app.hover_drop(hit.and_then(Hit::tree_node));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.drag.is_some() {
                match hit.and_then(Hit::tree_node) {
                    Some(target) => app.drop_on(target),
                    None => app.cancel_drag(),
                }
            }
            app.pressed = None;
        }
        MouseEventKind::Moved => {
            app.hovered_order = match hit {
                Some(Hit::OrderItem(node)) => Some(node),
                _ => None,
            };
        }
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}

/// While a node is picked up for a keyboard move, a click on a tree row
/// drops it there. The buttons stay inactive until the move ends.
fn handle_move_mouse(app: &mut App, mouse: MouseEvent, hit: Option<Hit>) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = hit.and_then(Hit::tree_node) {
                app.select(target);
                app.finish_move();
            }
        }
        MouseEventKind::Moved => {
            app.hovered_order = match hit {
                Some(Hit::OrderItem(node)) => Some(node),
                _ => None,
            };
        }
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_tree;

    fn demo_app() -> App {
        let (forest, root) = demo_tree("Root").unwrap();
        App::new(forest, root)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = demo_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_esc() {
        let mut app = demo_app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_works_in_any_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        for mode in [Mode::Normal, Mode::Move, Mode::Help] {
            let mut app = demo_app();
            app.mode = mode;
            handle_key_event(&mut app, ctrl_c);
            assert!(app.should_quit, "{mode:?}");
        }
    }

    #[test]
    fn test_enter_and_exit_help_mode() {
        let mut app = demo_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_in_move_mode_cancels() {
        let mut app = demo_app();
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.mode, Mode::Move);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.drag.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_toggle_order_panel() {
        let mut app = demo_app();
        assert!(app.show_order_panel);
        handle_key_event(&mut app, key(KeyCode::Char('o')));
        assert!(!app.show_order_panel);
    }

    #[test]
    fn test_click_in_help_closes_it() {
        let mut app = demo_app();
        app.mode = Mode::Help;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click, Rect::new(0, 0, 80, 24));
        assert_eq!(app.mode, Mode::Normal);
    }
}
