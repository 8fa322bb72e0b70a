use clap::Parser;
use log::info;
use std::process::ExitCode;
use tmplscan::{cli, ui};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level())).init();
    info!("Starting tmplscan v{}", env!("CARGO_PKG_VERSION"));

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
