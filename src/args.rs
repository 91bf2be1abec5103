//! Command-line surface for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DemoConfig;

#[derive(Debug, Parser)]
#[command(name = "lariat", about = "Searchable random-items demo for the lariat toolkit")]
pub struct Cli {
    /// Number of sample items to generate.
    #[arg(long)]
    pub items: Option<usize>,

    /// Seed for the item generator (reproducible item set).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the config file (defaults to the per-user config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write tracing output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line flags onto the loaded config.
    pub fn apply(&self, config: &mut DemoConfig) {
        if let Some(items) = self.items {
            config.items = items;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::parse_from(["lariat", "--items", "5", "--seed", "9"]);
        let mut config = DemoConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.items, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let cli = Cli::parse_from(["lariat"]);
        let mut config = DemoConfig {
            items: 7,
            seed: Some(3),
            ..DemoConfig::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.items, 7);
        assert_eq!(config.seed, Some(3));
    }
}
