use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "careers-backend", version, about = "Job postings REST service")]
pub struct CliArgs {
    /// Path to a .toml, .yaml or .json configuration file.
    #[arg(short = 'c', long = "config-path", env = "CAREERS_CONFIG_PATH")]
    pub config_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_flags() {
        let args = CliArgs::parse_from(["careers-backend", "-c", "a.toml"]);
        assert_eq!(args.config_path.as_deref(), Some("a.toml"));
        let args = CliArgs::parse_from(["careers-backend", "--config-path=b.yaml"]);
        assert_eq!(args.config_path.as_deref(), Some("b.yaml"));
    }
}
