use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: termsnake [<options>]

Play Snake in the terminal.  Steer with the arrow keys or WASD; press q, Esc,
or Ctrl-C to quit.

Options:
  -c, --config <PATH>   Read configuration from the given file
      --log-file <PATH> Write log messages to the given file
  -s, --speed <MS>      Milliseconds between movements of the snake
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

/// Settings given on the command line, each overriding the configuration
/// file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) speed: Option<u64>,
}

impl Command {
    pub(crate) fn from_env() -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("speed") => {
                    args.speed = Some(parser.value()?.parse()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--log-file=/tmp/s.log", "--speed", "150"]).unwrap(),
            Command::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("/tmp/s.log")),
                speed: Some(150),
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--speed", "150", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
    }

    #[test]
    fn bad_speed() {
        assert!(parse(&["--speed", "zippy"]).is_err());
        assert!(parse(&["-s"]).is_err());
    }

    #[test]
    fn unexpected_arg() {
        assert!(parse(&["--walls"]).is_err());
        assert!(parse(&["extra"]).is_err());
    }
}
