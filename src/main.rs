// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, config, paths, Flags};
use iced_gallery::error::Error;
use iced_gallery::logging;
use std::process::ExitCode;

const HELP: &str = "\
iced_gallery - a wall of image slots you can fill with your own pictures

USAGE:
    iced_gallery [OPTIONS]

OPTIONS:
    --lang <ID>          Interface language, e.g. en-US or fr
    --slots <N>          Number of slots (overrides settings.toml)
    --config-dir <DIR>   Directory holding settings.toml
    --i18n-dir <DIR>     Directory with .ftl files overriding the built-in ones
    --log <FILTER>       Log filter, e.g. debug or iced_gallery=trace
    --init-config        Write a default settings.toml if none exists, then exit
    -h, --help           Print this help

ENVIRONMENT:
    ICED_GALLERY_CONFIG_DIR   Same as --config-dir
    ICED_GALLERY_LOG          Same as --log
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        slots: args.opt_value_from_str("--slots")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log: args.opt_value_from_str("--log")?,
    })
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let init_config = args.contains("--init-config");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(flags.log.as_deref());
    paths::init_cli_overrides(flags.config_dir.clone());

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    if init_config {
        return match config::write_default_if_missing(&config::Config::default()) {
            Ok(Some(path)) => {
                tracing::info!(path = %path.display(), "wrote default settings");
                ExitCode::SUCCESS
            }
            Ok(None) => {
                tracing::info!("settings file already present, left untouched");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "could not write default settings");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = Error::from(err);
            tracing::error!(error = %err, "gallery could not start");
            ExitCode::FAILURE
        }
    }
}
