use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: gridsnake [-c|--config <FILE>]\n",
    "\n",
    "Play Snake in your terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>  Read configuration from the given file\n",
    "  -h, --help           Show this help message and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

pub(crate) const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Parsed command-line arguments
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arguments {
    Run {
        /// Configuration file given on the command line.  A file named here
        /// must exist.
        config: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    pub(crate) fn from_env() -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[rstest]
    #[case(&[], Arguments::Run { config: None })]
    #[case(&["-c", "snake.toml"], Arguments::Run { config: Some(PathBuf::from("snake.toml")) })]
    #[case(&["--config=snake.toml"], Arguments::Run { config: Some(PathBuf::from("snake.toml")) })]
    #[case(&["--config", "a.toml", "-c", "b.toml"], Arguments::Run { config: Some(PathBuf::from("b.toml")) })]
    #[case(&["-h"], Arguments::Help)]
    #[case(&["--help", "--bogus"], Arguments::Help)]
    #[case(&["-V"], Arguments::Version)]
    #[case(&["--version"], Arguments::Version)]
    fn test_parse(#[case] args: &[&str], #[case] parsed: Arguments) {
        assert_eq!(parse(args).unwrap(), parsed);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["-c"])]
    #[case(&["extra"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
