//! Cfg command handler: show the resolved configuration.
//!
//! Prints every configuration value together with where it came from
//! (default, file, or environment), so a surprising game setup can be
//! traced to its source.

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(out, "  players      = {} ({:?})", cfg.players, sources.players)?;
    writeln!(out, "  rounds       = {} ({:?})", cfg.rounds, sources.rounds)?;
    writeln!(
        out,
        "  max_discards = {} ({:?})",
        cfg.max_discards, sources.max_discards
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed         = {} ({:?})", seed, sources.seed)?,
        None => writeln!(out, "  seed         = random ({:?})", sources.seed)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn cfg_prints_every_setting() {
        // SAFETY: serial test; nothing else reads the environment
        unsafe {
            std::env::remove_var("FIVEDRAW_CONFIG");
            std::env::remove_var("FIVEDRAW_SEED");
            std::env::remove_var("FIVEDRAW_PLAYERS");
            std::env::remove_var("FIVEDRAW_ROUNDS");
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration:"));
        assert!(output.contains("players"));
        assert!(output.contains("rounds"));
        assert!(output.contains("max_discards"));
        assert!(output.contains("seed"));
    }
}
