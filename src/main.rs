use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use e_masonry::display::{panel_area, render_main_ui};
use e_masonry::input::{handle_command, map_event};
use e_masonry::{App, AppConfig, MasonryResult};
use log::{debug, error, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

type MasonryTerminal = Terminal<CrosstermBackend<Stdout>>;

fn init_logging(settings: &AppConfig) {
    // The TUI owns the terminal: keep stderr quiet unless logs go to a file
    let default_filter = if settings.log_file.is_some() {
        "info"
    } else {
        "error"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &settings.log_file {
        match std::fs::File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path, e),
        }
    }
    builder.init();
}

/// SIGINT/SIGTERM outside raw keyboard input still end the loop cleanly
fn install_interrupt_handler() -> MasonryResult<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
    Ok(interrupted)
}

fn setup_terminal() -> MasonryResult<MasonryTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut MasonryTerminal) -> MasonryResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(
    terminal: &mut MasonryTerminal,
    app: &mut App,
    settings: &AppConfig,
    interrupted: &AtomicBool,
) -> MasonryResult<()> {
    let tick_rate = settings.tick_rate();

    loop {
        terminal.draw(|f| render_main_ui(f, app, settings))?;

        let timeout = app.next_timeout(Instant::now(), tick_rate);
        if event::poll(timeout)? {
            let event = event::read()?;
            let panel = if app.show_panel {
                Some(panel_area(terminal.get_frame().area(), app))
            } else {
                None
            };
            if let Some(command) = map_event(&event, app, panel) {
                if handle_command(app, command, Instant::now()) {
                    debug!("Rendered {} blocks", app.current_render().tiles.len());
                }
            }
        }

        app.tick(Instant::now());

        if interrupted.load(Ordering::SeqCst) {
            info!("Interrupted by signal");
            app.should_quit = true;
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = AppConfig::discover()?;
    init_logging(&settings);
    info!("Starting masonry with {:?}", settings);

    let interrupted = install_interrupt_handler()?;

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&settings);
    let result = run(&mut terminal, &mut app, &settings, &interrupted);

    if let Err(e) = restore_terminal(&mut terminal) {
        warn!("Failed to restore terminal: {}", e);
    }
    if let Err(e) = &result {
        error!("Masonry exited with error: {}", e);
    }
    info!(
        "Masonry stopped after {} renders, {} loop ticks",
        app.render_count(),
        app.timer().fired()
    );
    result?;
    Ok(())
}
