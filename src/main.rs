use chrono::Local;
use clap::Parser;
use log::debug;
use std::fs;
use std::str::FromStr;
use wtrack::application::manage_settings::setting_value;
use wtrack::application::{
    AddEntryService, GraphService, HistoryService, InitService, RemoveEntryService,
    SettingsService, SummaryService,
};
use wtrack::cli::chart::{
    self, DEFAULT_SVG_HEIGHT, DEFAULT_SVG_WIDTH, DEFAULT_TERM_COLS, DEFAULT_TERM_ROWS,
};
use wtrack::cli::{format_history, format_settings, format_summary, Cli, Commands};
use wtrack::domain::format::format_weight;
use wtrack::domain::{TimeWindow, UnitSystem};
use wtrack::error::WtrackError;
use wtrack::infrastructure::{logging, FileSystemRepository};

fn main() {
    let cli = Cli::parse();

    // Logging stops when the handle is dropped
    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WtrackError> {
    let today = Local::now().date_naive();
    debug!("today is {}", today);

    match cli.command {
        Some(Commands::Init { path, unit }) => {
            let unit = UnitSystem::from_str(&unit).map_err(WtrackError::InvalidInput)?;
            InitService::execute(&path, unit)?;
            println!("Initialized wtrack at {}", path.display());
            println!("Units: {}", unit);
            Ok(())
        }
        Some(Commands::Add { weight, date }) => {
            let repo = FileSystemRepository::discover()?;
            let entry = AddEntryService::new(repo).execute(&weight, date.as_deref(), today)?;
            println!(
                "Added {} on {}",
                format_weight(entry.weight, entry.unit),
                entry.date.format("%B %d, %Y")
            );
            Ok(())
        }
        Some(Commands::Remove { number }) => {
            let repo = FileSystemRepository::discover()?;
            let removed = RemoveEntryService::new(repo).execute(number)?;
            println!(
                "Removed entry #{}: {} on {}",
                number,
                format_weight(removed.weight, removed.unit),
                removed.date.format("%B %d, %Y")
            );
            Ok(())
        }
        Some(Commands::History) => {
            let repo = FileSystemRepository::discover()?;
            let (rows, unit) = HistoryService::new(repo).execute()?;
            println!("{}", format_history(&rows, unit).trim_end());
            Ok(())
        }
        Some(Commands::Graph {
            window,
            svg,
            width,
            height,
        }) => {
            let window = TimeWindow::from_str(&window).map_err(WtrackError::InvalidInput)?;
            let repo = FileSystemRepository::discover()?;
            let service = GraphService::new(repo);

            match svg {
                Some(path) => {
                    let canvas = chart::svg_canvas(
                        width.unwrap_or(DEFAULT_SVG_WIDTH),
                        height.unwrap_or(DEFAULT_SVG_HEIGHT),
                    );
                    let view = service.execute(window, &canvas, today)?;
                    let layout = view
                        .layout
                        .ok_or_else(|| not_enough_data(view.entry_count, window))?;
                    fs::write(&path, chart::render_svg(&layout, &canvas))?;
                    println!(
                        "Wrote {} ({} entries, {})",
                        path.display(),
                        view.entry_count,
                        window
                    );
                }
                None => {
                    let cols = width.unwrap_or(DEFAULT_TERM_COLS);
                    let rows = height.unwrap_or(DEFAULT_TERM_ROWS);
                    let canvas = chart::terminal_canvas(cols, rows);
                    let view = service.execute(window, &canvas, today)?;
                    match view.layout {
                        Some(layout) => {
                            print!("{}", chart::render_terminal(&layout, cols, rows, view.unit))
                        }
                        None => println!("{}", not_enough_data(view.entry_count, window)),
                    }
                }
            }
            Ok(())
        }
        Some(Commands::Settings { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = SettingsService::new(repo);

            if list {
                print!("{}", format_settings(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    let settings = service.set(&k, &v, today)?;
                    println!("Set {} = {}", k, setting_value(&settings, &k)?);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: wtrack settings [--list | <key> [<value>]]");
                println!("Valid keys: goal-weight, goal-date, gender, height, beginning-weight, unit");
            }
            Ok(())
        }
        Some(Commands::Summary) | None => {
            let repo = FileSystemRepository::discover()?;
            let summary = SummaryService::new(repo).execute()?;
            print!("{}", format_summary(&summary));
            Ok(())
        }
    }
}

fn not_enough_data(count: usize, window: TimeWindow) -> WtrackError {
    WtrackError::InvalidInput(format!(
        "Not enough data to plot: {} entr{} in window '{}' (need at least 2)",
        count,
        if count == 1 { "y" } else { "ies" },
        window
    ))
}
