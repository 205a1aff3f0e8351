use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use room_controls::{
    click_tool_area_button, ActionDispatcher, SidebarControl, SidebarView, Store,
    ToolAreaButtonView, Viewport,
};
use serde::Serialize;
use shared::{protocol::StateAction, state::StoreSnapshot};
use tracing_subscriber::EnvFilter;

mod config;
mod session;

use config::{load_settings, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
struct Cli {
    /// Flat TOML settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// JSON store snapshot to start from; an empty store when omitted.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Overrides the configured viewport width.
    #[arg(long)]
    viewport_width: Option<u32>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the projected sidebar and tool-area button.
    Show,
    /// Click one or more sidebar controls against a loopback session.
    Click { controls: Vec<String> },
    /// Apply a JSON array of store actions, printing the view after each one.
    Replay { actions: PathBuf },
    /// Click the tool-area button.
    ToggleToolArea,
}

#[derive(Serialize)]
struct RenderedView<'a> {
    step: &'a str,
    sidebar: SidebarView,
    tool_area_button: ToolAreaButtonView,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli.config);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let initial = match &cli.snapshot {
        Some(path) => read_snapshot(path)?,
        None => StoreSnapshot::default(),
    };
    let viewport = Viewport::new(cli.viewport_width.unwrap_or(settings.viewport_width_px))
        .with_breakpoint(settings.small_screen_breakpoint_px);
    let store = Arc::new(Store::new(initial));

    match cli.command {
        Command::Show => print_view("initial", &store, viewport)?,
        Command::Click { controls } => {
            let controls = controls
                .iter()
                .map(|raw| raw.parse::<SidebarControl>())
                .collect::<Result<Vec<_>, _>>()?;
            if controls.is_empty() {
                return Err(anyhow!("no controls to click"));
            }
            let outcomes =
                session::run_clicks(&store, settings.command_queue_capacity, &controls)?;
            for outcome in &outcomes {
                match outcome.command {
                    Some(command) => println!("{} -> {}", outcome.control, command.name()),
                    None => println!("{} -> (no command)", outcome.control),
                }
            }
            print_view("after clicks", &store, viewport)?;
        }
        Command::Replay { actions } => {
            let raw = fs::read_to_string(&actions)
                .with_context(|| format!("failed to read actions '{}'", actions.display()))?;
            let actions: Vec<StateAction> = serde_json::from_str(&raw)
                .with_context(|| format!("malformed actions file '{}'", actions.display()))?;
            print_view("initial", &store, viewport)?;
            for action in actions {
                let step = action.name();
                store.dispatch(action);
                print_view(step, &store, viewport)?;
            }
        }
        Command::ToggleToolArea => {
            click_tool_area_button(store.as_ref());
            print_view("toggle_tool_area", &store, viewport)?;
        }
    }

    Ok(())
}

fn read_snapshot(path: &Path) -> Result<StoreSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot '{}'", path.display()))?;
    StoreSnapshot::from_json(&raw)
        .with_context(|| format!("invalid snapshot '{}'", path.display()))
}

fn print_view(step: &str, store: &Store, viewport: Viewport) -> Result<()> {
    let snapshot = store.snapshot();
    let rendered = RenderedView {
        step,
        sidebar: SidebarView::project(&snapshot, viewport),
        tool_area_button: ToolAreaButtonView::project(&snapshot),
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
