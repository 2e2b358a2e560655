mod app;
mod config;
mod simulation;
mod terminal;

use config::SessionConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; redirect it to keep them off the rendered screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    app::start(SessionConfig::default())
}
