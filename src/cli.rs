use clap::Parser;
use std::path::PathBuf;

use crate::loader::LoadConfig;

#[derive(Parser, Debug)]
#[command(name = "paperblossoms-db")]
#[command(version, about = "Build the Paper Blossoms SQLite database from rule data JSON")]
pub struct Cli {
    /// Directory containing the json/ input folder
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output SQLite database path [default: <ROOT>/paperblossoms.db]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> LoadConfig {
        let config = LoadConfig::new(self.root);
        match self.output {
            Some(output) => config.with_output(output),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DEFAULT_DB_NAME;
    use std::path::Path;

    #[test]
    fn test_zero_arguments() {
        let config = Cli::try_parse_from(["paperblossoms-db"]).unwrap().into_config();
        assert_eq!(config.root, Path::new("."));
        assert_eq!(config.output, Path::new(".").join(DEFAULT_DB_NAME));
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::try_parse_from(["paperblossoms-db", "--root", "data", "-o", "out/pb.db"])
            .unwrap();
        let config = cli.into_config();
        assert_eq!(config.root, Path::new("data"));
        assert_eq!(config.output, Path::new("out/pb.db"));
    }

    #[test]
    fn test_output_defaults_under_root() {
        let config = Cli::try_parse_from(["paperblossoms-db", "-r", "data"])
            .unwrap()
            .into_config();
        assert_eq!(config.output, Path::new("data").join(DEFAULT_DB_NAME));
    }
}
