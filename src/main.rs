//! apk-deploy CLI
//!
//! Usage: apk-deploy --apk-file <APK> [--app-package <ID>] [--sdk-path <DIR>]
//!                   [--launch-activity <NAME>]
//!
//! Exit codes: 0 on success or when no devices are connected, 1 on any
//! configuration error, parse error, or `--help`.

mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use apk_deploy::config::{self, OutputConfig};
use apk_deploy::presentation::Cli;
use apk_deploy::{AdbBridge, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::output::{print_config_warnings, print_env_warnings, print_error};
use crate::ui::sink::{ConsoleEventSink, JsonEventSink};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &OutputConfig::default());
            print_error(&ui, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_layered(&cwd)?.with_env_overrides();
    let config = &loaded.config;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config.output);
    print_config_warnings(&ui, &loaded.warnings);
    print_env_warnings(&ui, &loaded.env_warnings);

    let run_config = apk_deploy::resolve(&cli.resolve_request(), config)?;
    let bridge = AdbBridge::new(&run_config.bridge);

    let sink: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::new(cli.verbose))
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    apk_deploy::run(&run_config, &bridge, sink.as_ref())?;
    Ok(())
}
