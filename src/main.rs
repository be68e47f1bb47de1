use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::{env, process};

use configory::{Manager as ConfigManager, Options as ConfigOptions};
use libre_bridge::channel::{Bridge, MethodCall, Reply};
use libre_bridge::config::{Config, ConfigEventHandler};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Setup logging, stdout is reserved for replies.
    let directives = env::var("RUST_LOG").unwrap_or("warn,libre_bridge=info,configory=info".into());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_line_number(true)
        .with_writer(io::stderr)
        .init();

    info!("Started libre-bridge");

    if let Err(err) = run() {
        error!("[CRITICAL] {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    // Initialize configuration state.
    let (config_tx, config_rx) = mpsc::channel();
    let config_options = ConfigOptions::new("libre-bridge").notify(true);
    let config_manager =
        ConfigManager::with_options(&config_options, ConfigEventHandler::new(config_tx))?;
    let config = config_manager
        .get::<&str, Config>(&[])
        .inspect_err(|err| error!("Config error: {err}"))
        .ok()
        .flatten()
        .unwrap_or_default();

    let mut bridge = Bridge::new(config);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in stdin.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        apply_config_updates(&mut bridge, &config_rx);

        let reply = match serde_json::from_str::<MethodCall>(&line) {
            Ok(call) => bridge.handle(&call),
            Err(err) => {
                warn!("Ignoring malformed method call: {err}");
                Reply::from(&libre_bridge::Error::Json(err))
            },
        };

        serde_json::to_writer(&mut stdout, &reply)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    info!("Input closed, shutting down");

    Ok(())
}

/// Apply pending configuration reloads.
fn apply_config_updates(bridge: &mut Bridge, config_rx: &Receiver<Config>) {
    if let Some(config) = config_rx.try_iter().last() {
        bridge.set_config(config);
    }
}

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("{0}")]
    Configory(#[from] configory::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
}
