mod categorize;
mod config;
mod import;
mod models;
mod pipeline;
mod report;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config, args) = config::Config::from_args(&args)?;

    match args.len() {
        1 => run::as_tui(&config),
        2.. => run::as_cli(&args, &config),
        _ => {
            eprintln!("Usage: ofxdash [command] [--file <statement.ofx>]");
            Ok(())
        }
    }
}
