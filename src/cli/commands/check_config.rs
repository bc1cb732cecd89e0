//! Check-config command handler

use crate::config::Config;

pub fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    println!("Configuration is valid.");
    println!("{:-<40}", "");
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
