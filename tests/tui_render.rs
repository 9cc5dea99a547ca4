//! Drawing the UI onto a test backend
use e_masonry::display::{hit_test, panel_area, render_main_ui};
use e_masonry::input::{handle_command, map_event, Command};
use e_masonry::{Action, App, AppConfig, Field};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::layout::{Position, Rect};
use ratatui::Terminal;
use std::time::Instant;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app() -> App<StdRng> {
    App::with_rng(&AppConfig::default(), StdRng::seed_from_u64(21))
}

#[test]
fn test_panel_labels_drawn() {
    let settings = AppConfig::default();
    let app = app();
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| render_main_ui(f, &app, &settings)).unwrap();

    let text = screen_text(&terminal);
    for label in [
        "Show numbers",
        "Loop",
        "Min. number of blocks: 20",
        "Gap (px): 0",
        "Border radius (px): 0",
        "Repeat: 12",
        "Row span: 1",
        "Column span: 1",
        "[Randomize]",
        "[Regenerate]",
        "[Reset]",
    ] {
        assert!(text.contains(label), "missing {:?}", label);
    }
    assert!(text.contains("Masonry: 20 blocks, 12 columns"));
}

#[test]
fn test_click_on_drawn_panel() {
    let settings = AppConfig::default();
    let mut app = app();
    let screen = Rect::new(0, 0, 120, 40);
    let panel = panel_area(screen, &app);

    // "[+]" is the last segment of the Repeat line (fifth line inside the border)
    let inner_right = panel.right() - 2;
    let y = panel.y + 1 + 4;
    let mut found = None;
    for x in panel.x..inner_right {
        if let Some(action) = hit_test(panel, app.config(), Position::new(x, y)) {
            found = Some((x, action));
        }
    }
    let (x, action) = found.expect("clickable segment on the Repeat line");
    assert_eq!(action, Action::Increment(Field::Repeat));

    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
    let command = map_event(&click, &app, Some(panel)).unwrap();
    assert_eq!(command, Command::Act(Action::Increment(Field::Repeat)));
    assert!(handle_command(&mut app, command, Instant::now()));
    assert_eq!(app.config().repeat, 13);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| render_main_ui(f, &app, &settings)).unwrap();
    assert!(screen_text(&terminal).contains("Repeat: 13"));
}

#[test]
fn test_looping_title_and_help() {
    let settings = AppConfig::default();
    let mut app = app();
    app.dispatch(Action::ToggleLoop, Instant::now());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| render_main_ui(f, &app, &settings)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Controls (looping)"));
    assert!(text.contains("12 columns, looping"));

    app.show_help = true;
    terminal.draw(|f| render_main_ui(f, &app, &settings)).unwrap();
    assert!(screen_text(&terminal).contains("Masonry - Help"));
}
