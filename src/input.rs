// Input mapping - crossterm key and mouse events onto commands

use crate::action::Action;
use crate::app::App;
use crate::display::panel::{hit_test, Control};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::trace;
use rand::Rng;
use ratatui::layout::{Position, Rect};
use std::time::Instant;

const PAGE_ROWS: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    FocusNext,
    FocusPrevious,
    /// Step the focused stepper up (`true`) or down
    StepFocused(bool),
    ActivateFocused,
    Scroll(i32),
    TogglePanel,
    ToggleLog,
    ToggleHelp,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('h') | KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Command::FocusNext,
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Command::FocusPrevious,
        KeyCode::Left | KeyCode::Char('-') => Command::StepFocused(false),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Command::StepFocused(true),
        KeyCode::Char(' ') | KeyCode::Enter => Command::ActivateFocused,
        KeyCode::Char('n') => Command::Act(Action::ToggleShowNumbers),
        KeyCode::Char('l') => Command::Act(Action::ToggleLoop),
        KeyCode::Char('r') => Command::Act(Action::Randomize),
        KeyCode::Char('g') => Command::Act(Action::Regenerate),
        KeyCode::Char('0') => Command::Act(Action::Reset),
        KeyCode::PageUp => Command::Scroll(-PAGE_ROWS),
        KeyCode::PageDown => Command::Scroll(PAGE_ROWS),
        KeyCode::Char('p') => Command::TogglePanel,
        KeyCode::Char('e') => Command::ToggleLog,
        _ => return None,
    };
    Some(command)
}

/// Clicks resolve against the panel as last drawn; `panel` is `None` when hidden
pub fn map_mouse<R: Rng>(mouse: MouseEvent, app: &App<R>, panel: Option<Rect>) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let area = panel?;
            hit_test(area, app.config(), Position::new(mouse.column, mouse.row)).map(Command::Act)
        }
        MouseEventKind::ScrollDown => Some(Command::Scroll(1)),
        MouseEventKind::ScrollUp => Some(Command::Scroll(-1)),
        _ => None,
    }
}

pub fn map_event<R: Rng>(event: &Event, app: &App<R>, panel: Option<Rect>) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, app, panel),
        _ => None,
    }
}

/// Applies a command to the app; returns whether the configuration changed
pub fn handle_command<R: Rng>(app: &mut App<R>, command: Command, now: Instant) -> bool {
    trace!("Command {:?}", command);
    match command {
        Command::Act(action) => {
            app.focus = focus_index(Control::for_action(action));
            app.dispatch(action, now)
        }
        Command::FocusNext => {
            app.focus_next();
            false
        }
        Command::FocusPrevious => {
            app.focus_previous();
            false
        }
        Command::StepFocused(up) => match app.focused_control().step(up) {
            Some(action) => app.dispatch(action, now),
            None => false,
        },
        Command::ActivateFocused => {
            let action = app.focused_control().activate();
            app.dispatch(action, now)
        }
        Command::Scroll(delta) => {
            app.scroll_by(delta);
            false
        }
        Command::TogglePanel => {
            app.show_panel = !app.show_panel;
            false
        }
        Command::ToggleLog => {
            app.show_log = !app.show_log;
            false
        }
        Command::ToggleHelp => {
            app.show_help = !app.show_help;
            false
        }
        Command::Quit => {
            app.should_quit = true;
            false
        }
    }
}

/// Focus follows the last control used, by key shortcut or click
pub fn focus_index(control: Control) -> usize {
    Control::ALL
        .iter()
        .position(|c| *c == control)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Field};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(map_key(press(KeyCode::Char('l'))), Some(Command::Act(Action::ToggleLoop)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), Some(Command::Act(Action::Reset)));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_stepping_focused_repeat() {
        let mut app = App::with_rng(&AppConfig::default(), StdRng::seed_from_u64(4));
        app.focus = focus_index(Control::Stepper(Field::Repeat));
        let now = Instant::now();
        for _ in 0..3 {
            assert!(handle_command(&mut app, Command::StepFocused(true), now));
        }
        assert_eq!(app.config().repeat, 15);
        assert_eq!(app.current_render().template.columns, 15);
    }

    #[test]
    fn test_step_on_button_does_nothing() {
        let mut app = App::with_rng(&AppConfig::default(), StdRng::seed_from_u64(4));
        app.focus = focus_index(Control::Reset);
        assert!(!handle_command(&mut app, Command::StepFocused(true), Instant::now()));
        assert_eq!(app.render_count(), 1);
    }
}
