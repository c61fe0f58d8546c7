// SPDX-License-Identifier: MPL-2.0
use iced_swipe::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
IcedSwipe - keep or delete random photos from a folder

USAGE:
  iced_swipe [OPTIONS] [FOLDER]

ARGS:
  [FOLDER]               Photo folder to review for this run

OPTIONS:
  --lang <ID>            UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --verbose              Debug logging (RUST_LOG takes precedence)
  -h, --help             Print this help
";

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<(Flags, bool), pico_args::Error> {
    let verbose = args.contains("--verbose");
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let library_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok((
        Flags {
            lang,
            library_dir,
            config_dir,
        },
        verbose,
    ))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, verbose) = match parse_flags(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    setup_logging(verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting IcedSwipe");

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
