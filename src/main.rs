mod app;
mod command;
mod config;
mod consts;
mod game;
mod snake;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                Arg::Value(val) => {
                    return Err(lexopt::Error::UnexpectedArgument(val));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Arguments::Run { config, log_file } => {
                let (path, allow_missing) = match config {
                    Some(p) => (p, false),
                    None => (Config::default_path()?, true),
                };
                let config = Config::load(&path, allow_missing)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                if let Some(logpath) = log_file.as_ref().or(config.log.file.as_ref()) {
                    init_logging(logpath, config.log.level)?;
                }
                log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                let terminal = ratatui::init();
                let r = App::new(&config).run(terminal);
                ratatui::restore();
                match r {
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                    r => r.context("error running game"),
                }
            }
            Arguments::Help => {
                println!("Usage: snaketrail [-c|--config <FILE>] [--log-file <FILE>]");
                println!();
                println!("Steer a snake around a terminal arena");
                println!();
                println!("Options:");
                println!("  -c <FILE>, --config <FILE>");
                println!("                    Read configuration from the given file");
                println!();
                println!("  --log-file <FILE> Write log messages to the given file");
                println!();
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Arguments::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn init_logging(path: &Path, level: log::LevelFilter) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    simplelog::WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logging")
}

fn parse_args<I>(args: I) -> Result<Arguments, lexopt::Error>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    Arguments::from_parser(Parser::from_iter(args))
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("snaketrail: {e}");
            return ExitCode::from(2);
        }
    };
    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snaketrail: {e:?}");
            ExitCode::from(2)
        }
    }
}
