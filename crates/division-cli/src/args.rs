use clap::{Parser, Subcommand};

/// CLI arguments for division-cli
#[derive(Debug, Parser)]
#[command(
    name = "division",
    version,
    about = "CLI for querying the province / city / area division code index"
)]
pub struct CliArgs {
    /// JSON dataset to load (`.json`, or gzip-compressed).
    /// Defaults to the dataset bundled with division-core.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many provinces, cities and areas were loaded
    Stats,

    /// Print the direct children of a code as JSON (all provinces if omitted)
    Children {
        /// Division code, e.g. 110000
        code: Option<String>,
    },

    /// Print the full name of a code
    Name {
        /// Division code, e.g. 110101
        code: String,

        /// Separator placed between province, city and area names
        #[arg(short = 's', long = "sep", default_value = "")]
        sep: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_with_separator() {
        let args = CliArgs::try_parse_from(["division", "name", "110101", "--sep", "/"]).unwrap();
        match args.command {
            Commands::Name { code, sep } => {
                assert_eq!(code, "110101");
                assert_eq!(sep, "/");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn children_code_is_optional() {
        let args = CliArgs::try_parse_from(["division", "children"]).unwrap();
        assert!(matches!(args.command, Commands::Children { code: None }));
    }

    #[test]
    fn global_input_after_subcommand() {
        let args = CliArgs::try_parse_from(["division", "stats", "--input", "d.json"]).unwrap();
        assert_eq!(args.input.as_deref(), Some("d.json"));
        assert!(matches!(args.command, Commands::Stats));
    }

    #[test]
    fn removed_commands_are_rejected() {
        assert!(CliArgs::try_parse_from(["division", "build", "--out", "d.bin"]).is_err());
        assert!(CliArgs::try_parse_from(["division", "stats", "--cached"]).is_err());
    }
}
