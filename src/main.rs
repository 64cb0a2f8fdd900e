// SPDX-License-Identifier: MPL-2.0
use banner_lens::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
banner_lens - banner carousel with a zoom/pan viewer

USAGE:
    banner_lens [OPTIONS] [SOURCE]

ARGS:
    <SOURCE>    Directory of images or a .toml banner manifest

OPTIONS:
    --lang <ID>          Interface language (e.g. en-US, fr)
    --config-dir <DIR>   Directory holding settings.toml
    -h, --help           Print this help
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = parse_option(&mut args, "--lang");
    let config_dir = parse_option(&mut args, "--config-dir");
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, source })
}

/// Reads an optional string flag, logging and ignoring malformed values.
fn parse_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "ignoring invalid command line flag");
            None
        }
    }
}
