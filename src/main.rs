//! Threadlens - A terminal-based JVM thread dump viewer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use threadlens::app::App;
use threadlens::dump::ThreadState;
use threadlens::format::Locale;
use threadlens::{ui, util};

#[derive(Parser, Debug)]
#[command(name = "threadlens")]
#[command(about = "A terminal-based JVM thread dump viewer", long_about = None)]
struct Args {
    /// Path to the thread dump file to open
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Locale used for date and number formatting
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Threadlens");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file, Locale::from_tag(&args.locale));
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Threadlens exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Lock-name search input - handle separately
                if app.show_dump_view && app.dump_view.is_searching() {
                    match key.code {
                        KeyCode::Enter => app.dump_view.submit_search(),
                        KeyCode::Esc => app.dump_view.cancel_search(),
                        KeyCode::Backspace => app.dump_view.search_backspace(),
                        KeyCode::Char(c) => app.dump_view.search_input(c),
                        _ => {}
                    }
                    continue;
                }

                // Dump viewer mode - handle separately
                if app.show_dump_view {
                    match (key.modifiers, key.code) {
                        // Close viewer (visibility lives on the app)
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q'))
                        | (KeyModifiers::NONE, KeyCode::Char('d')) => {
                            app.close_dump_view();
                            app.status = "Thread dump viewer closed".to_string();
                        }
                        // State filter badges
                        (KeyModifiers::NONE, KeyCode::Char('a')) => {
                            app.dump_view.set_state_filter(None);
                            app.status = "Filter: all states".to_string();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('r')) => {
                            app.dump_view.set_state_filter(Some(ThreadState::Runnable));
                            app.status = "Filter: RUNNABLE".to_string();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('w')) => {
                            app.dump_view.set_state_filter(Some(ThreadState::Waiting));
                            app.status = "Filter: WAITING".to_string();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('t')) => {
                            app.dump_view.set_state_filter(Some(ThreadState::TimedWaiting));
                            app.status = "Filter: TIMED_WAITING".to_string();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('b')) => {
                            app.dump_view.set_state_filter(Some(ThreadState::Blocked));
                            app.status = "Filter: BLOCKED".to_string();
                        }
                        // Lock-name search
                        (KeyModifiers::NONE, KeyCode::Char('/')) => {
                            app.dump_view.start_search();
                        }
                        // Selection with jk or arrows
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.dump_view.select_up(1);
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            let len = app.dump_view.filtered(app.thread_dump()).len();
                            app.dump_view.select_down(1, len);
                        }
                        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                            app.dump_view.select_up(10);
                        }
                        (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                            let len = app.dump_view.filtered(app.thread_dump()).len();
                            app.dump_view.select_down(10, len);
                        }
                        // Clipboard
                        (KeyModifiers::NONE, KeyCode::Char('y')) => {
                            let selected = app
                                .dump_view
                                .filtered(app.thread_dump())
                                .get(app.dump_view.selected())
                                .map(|t| (*t).clone());
                            match selected {
                                Some(thread) => match util::copy_thread_info(&thread) {
                                    Ok(()) => {
                                        app.status = format!("Copied {}!", thread.thread_name);
                                    }
                                    Err(e) => app.status = format!("Copy failed: {}", e),
                                },
                                None => app.status = "No thread selected".to_string(),
                            }
                        }
                        // Reload without losing filters
                        (KeyModifiers::SHIFT, KeyCode::Char('R')) => {
                            app.reload();
                        }
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Open the dump viewer
                    (KeyModifiers::NONE, KeyCode::Char('d'))
                    | (KeyModifiers::NONE, KeyCode::Enter) => {
                        if app.dump.is_some() {
                            app.open_dump_view();
                        } else {
                            app.status = "No thread dump loaded".to_string();
                        }
                    }

                    // Features
                    (KeyModifiers::SHIFT, KeyCode::Char('R')) => {
                        app.reload();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status =
                            "Help: q=quit, d=thread dump, R=reload, T=theme, y=copy (in viewer)"
                                .to_string();
                    }

                    _ => {}
                }
            }
        }
    }
}
