// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  --log <FILTER>        Log filter, e.g. iced_gallery=debug (overrides RUST_LOG)
  -h, --help            Print this help
";

const DEFAULT_LOG_FILTER: &str = "iced_gallery=info";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log: args.opt_value_from_str("--log")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging(flags.log.as_deref());
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
