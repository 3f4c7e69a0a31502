use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use sugfeed::app::App;
use sugfeed::config::{self, Config};
use sugfeed::device_code;
use sugfeed::feed::FeedController;
use sugfeed::render::html;

/// Export format for non-interactive runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Html,
    Json,
}

/// Interactive feed of search suggestions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a config file (defaults to ~/.config/sugfeed/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pages to load at startup
    #[arg(long, value_name = "N")]
    pages: Option<usize>,

    /// Start with background services (pagination) turned off
    #[arg(long)]
    no_background_services: bool,

    /// Initial search query
    #[arg(short, long)]
    query: Option<String>,

    /// Print the feed in the given format and exit instead of starting the UI
    #[arg(long, value_enum, value_name = "FORMAT")]
    export: Option<ExportFormat>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let loaded = config::load_config(args.config.as_deref());
    if let Some(warning) = &loaded.warning {
        eprintln!("warning: {}", warning);
    }
    let config = apply_overrides(loaded.config, &args);

    if let Some(format) = args.export {
        return export(&config, args.query.as_deref(), format);
    }

    let mut app = App::new(&config);
    if let Some(query) = &args.query {
        app.input.insert_str(query);
        app.submit_search();
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal even if the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(pages) = args.pages {
        config.feed.initial_pages = pages;
    }
    if args.no_background_services {
        config.feed.background_services = false;
    }
    config
}

fn export(config: &Config, query: Option<&str>, format: ExportFormat) -> Result<()> {
    let mut feed = FeedController::new(config.feed.background_services);
    for _ in 0..config.feed.initial_pages {
        feed.load_more();
    }
    if let Some(query) = query {
        feed.search(query);
    }

    let output = match format {
        ExportFormat::Html => {
            let code = config.ui.show_device_code.then(device_code::generate);
            html::render_page(&feed, code.as_deref())
        }
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&feed.visible_items())?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Debug builds log to a file in the temp directory; the UI owns the terminal.
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;

    let path = std::env::temp_dir().join("sugfeed-debug.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
