// SPDX-License-Identifier: MPL-2.0
use notify_center::app::{self, Flags};
use notify_center::logging;

const HELP: &str = "\
notify_center - toast notification center demo

USAGE:
  notify_center [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory containing settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  NOTIFY_CENTER_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter (default: info)
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!(error = %err, "invalid command line");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { config_dir })
}
