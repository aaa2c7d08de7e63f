mod add;
mod cli;
mod error;
mod format;
mod init;
mod latest;
mod project;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            cwd,
            timezone,
            path,
            change_categories,
        } => init::execute(&cwd, timezone, path, change_categories),
        Commands::Add {
            change,
            cwd,
            category,
            yes,
        } => add::execute(&cwd, change, category, yes),
        Commands::Latest {
            cwd,
            today,
            date,
            json,
        } => latest::execute(&cwd, today, date.as_deref(), json),
        Commands::Format { cwd } => format::execute(&cwd),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
