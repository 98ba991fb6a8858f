// Entry point: parse options, set up logging, run the picker and hand the
// terminal over to the chosen multiplexer command.

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;
use std::process;
use zpick::config::{Args, Config};
use zpick::{exec, ui, Error};

// The picker owns the terminal, so logs only ever go to a file.
fn init_logging(path: &Path, level: LevelFilter) -> zpick::Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
    WriteLogger::init(level, log_config, log_file).map_err(|e| Error::Logging(e.to_string()))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path, args.log_level) {
            eprintln!("{e}");
        }
    }
    let config = Config::from_args(&args);
    let print_only = config.print_only;

    let model = match ui::run(config).await {
        Ok(m) => m,
        Err(e) => {
            error!("{e}");
            eprintln!("Alas, there's been an error: {e}");
            process::exit(1);
        }
    };

    let Some(action) = model.action else {
        if let Some(err) = &model.err {
            println!("\nAn error occurred: {err}\n");
        } else if let Some(status) = &model.status {
            println!("\nMessage: {status}\n");
        }
        process::exit(if model.fatal { 1 } else { 0 });
    };

    if print_only {
        println!("{}", exec::command_line(&action));
        return;
    }

    info!("handing off to {}", exec::command_line(&action));
    match exec::handoff(&action) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
