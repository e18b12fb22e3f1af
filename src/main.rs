//! seriesview - plot named integer series from a CSV file in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use seriesview::app::{App, AppOptions};
use seriesview::{ui, LayoutConfig};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "seriesview")]
#[command(about = "Plot named integer series from a CSV file", long_about = None)]
struct Args {
    /// Path to the CSV file or a directory to browse
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Show the legend from the start
    #[arg(long)]
    legend: bool,

    /// Initial lower x-axis bound
    #[arg(long, allow_negative_numbers = true)]
    x_from: Option<i64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting seriesview");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let mut app = App::new(AppOptions {
        legend: args.legend,
        x_from: args.x_from,
        layout: LayoutConfig::default(),
    });

    match args.file {
        Some(path) if path.is_dir() => app.browse_dir(path),
        Some(path) => {
            if let Err(e) = app.open_path(&path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {},
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("seriesview exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let poll = Duration::from_millis(app.layout.poll_interval_ms);

    loop {
        if app.take_dirty() {
            terminal.draw(|f| ui::draw(f, &mut app))?;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(&mut app, key) {
                    return Ok(());
                }
            },
            Event::Resize(_, _) => {
                terminal.draw(|f| ui::draw(f, &mut app))?;
            },
            _ => {},
        }
    }
}

/// Apply one key press; returns true to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // File browser mode
    if app.file_browser_mode {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return true,
            (KeyModifiers::NONE, KeyCode::Esc) => app.close_file_browser(),
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.browser_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.browser_down();
            },
            (KeyModifiers::NONE, KeyCode::Enter)
            | (KeyModifiers::NONE, KeyCode::Char('l'))
            | (KeyModifiers::NONE, KeyCode::Right) => {
                app.browser_select();
            },
            (KeyModifiers::NONE, KeyCode::Char('h')) | (KeyModifiers::NONE, KeyCode::Left) => {
                app.browser_parent();
            },
            (KeyModifiers::NONE, KeyCode::Char('.')) => app.toggle_hidden(),
            _ => {},
        }
        return false;
    }

    let step = app.layout.x_step;

    // Shifted punctuation arrives with SHIFT on some terminals, so match the char only.
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current(),
        KeyCode::Char('a') => app.select_all(true),
        KeyCode::Char('A') => app.select_all(false),
        KeyCode::Char('r') => app.recompute(),
        KeyCode::Char('[') => app.shift_x_from(-step),
        KeyCode::Char(']') => app.shift_x_from(step),
        KeyCode::Char('{') => app.shift_x_to(-step),
        KeyCode::Char('}') => app.shift_x_to(step),
        KeyCode::Char('L') => app.toggle_legend(),
        KeyCode::Char('o') => app.open_file_browser(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('?') => app.show_about(),
        _ => {},
    }
    false
}
