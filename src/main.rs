mod config;
mod logging;

use std::process;

use config::{Config, ConfigError};
use logging::{LogLevel, Logger};

fn main() {
    // Load .env file if it exists (ignore error if not found)
    dotenvy::dotenv().ok();

    if let Err(e) = run() {
        // Config failed, so no configured logger exists yet; fall back to
        // the default level to report the failure.
        let logger = Logger::new(LogLevel::Info);
        logger.error("Failed to start application:", &[&e]);
        process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = Config::from_env()?;
    let logger = Logger::new(config.log_level);

    logger.info("Starting stream locator...", &[]);
    logger.info(&format!("Environment: {}", config.environment), &[]);
    logger.info(&format!("Port: {}", config.port), &[]);
    logger.debug(&format!("Resolved configuration: {:?}", config), &[]);

    // TODO: bind the HTTP server on config.port once request handling exists.
    logger.warn("Application initialization is not implemented yet", &[]);

    Ok(())
}
