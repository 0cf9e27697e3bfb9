//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `source` is the explicit `--config` path, if one was given.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    source: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            let path = match source {
                Some(path) => path.to_path_buf(),
                None => Config::path()?,
            };
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("{}", formatter.warning("File does not exist; defaults are in use"));
            }
        }
    }
    Ok(())
}
