use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyEventKind;

use membar::app::App;
use membar::config::{self, Config, load_config, load_config_from_path};
use membar::event::{Event, EventHandler};
use membar::glyph::text_summary;
use membar::prefs::{DisplayMode, JsonFileStore, MemoryStore, PreferenceStore, state_path};
use membar::system::collector::HostCollector;
use membar::system::sampler::Sampler;
use membar::{logging, ui};

#[derive(Parser)]
#[command(
    name = "membar",
    version,
    about = "Status-bar memory and CPU monitor with rolling sparklines"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling period in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Start in this mode for this session only: graph or text
    #[arg(long)]
    mode: Option<String>,

    /// Take one sample, print the text summary and exit.
    #[arg(long, default_value_t = false)]
    print: bool,

    /// With --print, emit the full snapshot as JSON.
    #[arg(long, default_value_t = false, requires = "print")]
    json: bool,

    /// Write JSON-lines tracing output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match &cli.log_file {
        Some(path) => logging::init_json_file(path)?,
        None if cli.print => logging::init_stderr()?,
        None => {}
    }

    let config = load_config_for_cli(&cli)?;
    let mode_override = match &cli.mode {
        Some(raw) => Some(
            DisplayMode::from_str_config(raw)
                .ok_or_else(|| eyre!("--mode must be `graph` or `text`, got `{raw}`"))?,
        ),
        None => None,
    };

    if cli.print {
        return print_once(&config, cli.json).await;
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config, mode_override).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    config: Config,
    mode_override: Option<DisplayMode>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let mut app = App::new(config, HostCollector::new(), preference_store(), mode_override);
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = app.map_key(key);
                app.dispatch(action);
                true
            }
            Event::Key(_) => false,
            Event::Tick => {
                app.refresh_data();
                true
            }
            Event::Resize => true,
        };
        if should_draw {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    tracing::info!(ticks = app.sampler.tick_count(), "exiting");
    Ok(())
}

/// One real CPU delta needs two readings a period apart.
async fn print_once(config: &Config, json: bool) -> Result<()> {
    let mut sampler = Sampler::new(HostCollector::new(), config.general.top_process_count);
    tokio::time::sleep(Duration::from_millis(config.general.refresh_rate_ms)).await;
    let snapshot = sampler.tick();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "{}",
            text_summary(snapshot.memory.used_percentage(), snapshot.cpu_percent)
        );
    }
    Ok(())
}

fn preference_store() -> Box<dyn PreferenceStore> {
    match state_path() {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => {
            tracing::warn!("no config directory, preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

fn load_config_for_cli(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if config.general.refresh_rate_ms == 0 {
        return Err(eyre!("refresh rate must be greater than 0"));
    }
    if let Some(path) = config::config_path() {
        tracing::debug!(path = %path.display(), "config location");
    }

    Ok(config)
}
