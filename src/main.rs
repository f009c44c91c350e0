//! pastebind binary: load settings, register hotkeys, paste on trigger.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info, warn};

use pastebind::{logging, notify, BinderError, HotkeyRegistrar, PasteSequencer, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "pastebind",
    version,
    about = "Global hotkeys that paste pre-selected images into the focused application"
)]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "settings.json")]
    config: PathBuf,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Enable verbose console output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _log_guards = logging::init(&cli.log_dir, cli.verbose);

    if let Err(err) = run(&cli).await {
        handle_fatal(err);
    }
}

async fn run(cli: &Cli) -> pastebind::Result<()> {
    let settings = Settings::from_file(&cli.config)?;

    let mut registrar = HotkeyRegistrar::new()?;
    let report = registrar.register_bindings(&settings.shortcuts, settings.notify_missing_images);
    if report.registered == 0 {
        warn!("none of the configured image files exist");
        return Err(BinderError::NoUsableShortcuts);
    }
    if report.skipped > 0 {
        warn!("{} shortcut(s) skipped", report.skipped);
    }

    info!("program started");
    notify::notify("Start", "Program started");
    println!(
        "{}",
        format!(
            "🔥 {} shortcut(s) active. Press Ctrl+C to quit.",
            report.registered
        )
        .green()
    );

    let sequencer = Arc::new(PasteSequencer::from_settings(&settings));
    Arc::new(registrar).start_listener(sequencer).await?;

    // An interrupt terminates immediately, without a notification.
    tokio::signal::ctrl_c().await?;
    info!("interrupt received, exiting");
    Ok(())
}

fn handle_fatal(err: BinderError) {
    match &err {
        BinderError::ConfigMissing { .. } => {
            error!("{err}");
            notify::notify(
                "Error",
                "Settings file not found\nSwitch to the program to exit",
            );
        }
        BinderError::NoUsableShortcuts => {
            error!("{err}");
            notify::notify("Notice", "None of the configured image files exist");
        }
        _ => {
            error!("critical error: {err}");
            notify::notify("Error", "Unexpected error");
        }
    }

    wait_for_ack();
    process::exit(1);
}

fn wait_for_ack() {
    println!("{}", "Press ENTER to exit".red().bold());
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
}
