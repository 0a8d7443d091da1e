mod app;
mod domain;
mod engine;
mod input;
mod notifications;
mod persistence;
mod report;
mod schedule;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_tomate_dir, get_tomate_dir, init_local_tomate, load_state, state_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "tomate")]
#[command(about = "A calm, terminal-based Pomodoro timer with per-task focus tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tomate directory in the current directory
    Init,
    /// Print summary statistics from the saved state
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let tomate_dir = init_local_tomate()?;
            println!("Initialized tomate directory: {}", tomate_dir.display());
            println!();
            println!("Tomate will now use this local directory for task storage.");
            println!("Run 'tomate' to start a pomodoro.");
            Ok(())
        }
        Some(Commands::Stats) => report::print_stats(),
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure tomate directory exists
    ensure_tomate_dir()?;

    // Show which directory we're using
    let tomate_dir = get_tomate_dir()?;
    eprintln!("Using tomate directory: {}", tomate_dir.display());

    // Load saved state; a missing or unreadable file starts a seeded session
    let (outcome, load_err) = load_state(state_file()?);
    if let Some(err) = load_err {
        eprintln!("Warning: starting fresh, could not load saved state: {}", err);
    }

    // Create app state
    let mut app = AppState::new(outcome);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Snapshot the live countdown into the current task before saving
    app.prepare_exit();

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();
    let mut last_second = Instant::now();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key, Instant::now())?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        let now = Instant::now();
        let gap = now.duration_since(last_second);

        if gap >= ticker::suspend_gap_threshold() {
            // The machine slept; pause instead of crediting the gap.
            app.handle_suspend(gap, now);
            last_second = now;
        } else {
            // Tick once per elapsed wall-clock second
            while now.duration_since(last_second) >= Duration::from_secs(1) {
                app.tick_second(now);
                last_second += Duration::from_secs(1);
            }
        }

        // Fire delayed phase-transition actions
        app.process_due(now);

        // Autosave if needed
        if app.needs_save {
            app.save()?;
        }
    }
}
