// SPDX-License-Identifier: MPL-2.0
use angel_voice::app::{self, paths, Flags};
use angel_voice::config;
use angel_voice::i18n::SystemLanguage;
use angel_voice::logging;
use std::process::ExitCode;

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        print_locale: args.contains("--print-locale"),
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    logging::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("angel_voice: {error}");
            eprintln!(
                "usage: angel_voice [--lang <code>] [--i18n-dir <dir>] [--config-dir <dir>] [--print-locale]"
            );
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    let settings = config::load().unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to read settings, using defaults");
        config::Config::default()
    });

    let translations = match app::bootstrap(&flags, &settings, &SystemLanguage) {
        Ok(translations) => translations,
        Err(error) => {
            tracing::error!(%error, "failed to load translations");
            return ExitCode::FAILURE;
        }
    };

    if flags.print_locale {
        println!("locale={}", translations.locale);
        println!("fallback={}", translations.fallback_locale);
        return ExitCode::SUCCESS;
    }

    tracing::info!("starting AngelVoice");
    match app::run(translations) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
