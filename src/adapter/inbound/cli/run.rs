//! Handler for the default (serve) command.

use super::command::Cli;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Load configuration, start logging, and serve until shutdown.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;
    cli.apply(&mut config);
    config.init_logging();

    bootstrap::serve(config).await
}
