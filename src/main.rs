mod app;
mod config;
mod grid;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "tabulon")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "A terminal data grid with add/remove rows, status badges and progress bars")]
struct Args {
    /// Seed the grid from a JSON row file instead of the sample set
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print the seed rows as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Theme name (dark or light), overrides the configured one
    #[arg(short, long)]
    theme: Option<String>,

    /// Rows per page, overrides the configured value
    #[arg(short, long)]
    page_size: Option<usize>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.dump {
        return dump_rows(args.data.as_deref());
    }

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    run_tui(config, args.data)
}

fn dump_rows(data: Option<&std::path::Path>) -> Result<()> {
    let rows = match data {
        Some(path) => grid::rows_from_file(path)?,
        None => grid::RowStore::sample().rows().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn run_tui(config: AppConfig, data: Option<PathBuf>) -> Result<()> {
    // Create app state first so a bad --data file fails before the
    // terminal is switched to raw mode
    let mut app = App::new(config, data)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and catch any errors to prevent crashes
                            if let Err(e) = app.handle_key(key) {
                                app.status_message = Some(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        app.tick();
    }
}
