//! spicy-table demo binary.
//!
//! Mounts the datatable widget over built-in sample data, or over a JSON
//! file passed on the command line.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

use spicy_table::app::{sample_datasets, App, Dataset};
use spicy_table::config::Settings;
use spicy_table::events::{Event, EventHandler};
use spicy_table::logging;
use spicy_table::ui::theme::{init_theme, Theme};

/// Browse tabular data in the terminal.
#[derive(Debug, Parser)]
#[command(name = "spicy-table", version, about)]
struct Cli {
    /// JSON file (array of flat objects) to view instead of the sample data.
    file: Option<PathBuf>,

    /// Override the configured page size.
    #[arg(long)]
    page_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init().context("failed to initialize logging")?;

    let mut settings = Settings::load().context("failed to load settings")?;
    if let Some(size) = cli.page_size {
        anyhow::ensure!(size > 0, "--page-size must be at least 1");
        settings.default_page_size = size;
    }
    init_theme(Theme::by_name(&settings.theme));

    let datasets = match &cli.file {
        Some(path) => vec![Dataset::from_json_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?],
        None => sample_datasets(),
    };

    let mut app = App::new(settings, datasets);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    if let Err(e) = &result {
        error!(error = %e, "Exited with error");
    }
    result
}

/// Drive the event loop until the app requests quit.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        match events.next()? {
            Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                app.handle_event(Event::Key(key));
            }
            Event::Key(_) => {}
            event => app.handle_event(event),
        }
    }

    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
