//! Entry point: parse CLI, load the dataset, build indexes, dispatch.

use anyhow::Context;
use clap::Parser;
use fifa_index::{
    cli::{Commands, FifaIndex},
    commands::{handle_query, resolve_dataset_paths, run_shell, Query},
    dataset::load_dataset,
    Indexes,
};
use std::{io, time::Instant};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let app = FifaIndex::parse();
    init_tracing(app.verbose);

    let started = Instant::now();
    let paths = resolve_dataset_paths(&app.dataset);
    let dataset = load_dataset(&paths)
        .with_context(|| format!("Failed to load dataset from {}", paths.players.display()))?;
    let indexes = Indexes::build(&dataset);
    let setup_secs = started.elapsed().as_secs_f64();
    drop(dataset);

    let query = match app.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            eprintln!("Data loaded and indexes built in {setup_secs:.4} seconds.");
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            run_shell(&indexes, stdin.lock(), &mut stdout, app.json)?;
            return Ok(());
        }
        Commands::Player { prefix } => Query::Prefix(prefix.join(" ")),
        Commands::Id { id } => Query::Id(id),
        Commands::User { user_id } => Query::User(user_id),
        Commands::Top { n, position } => Query::TopByPosition { n, position },
        Commands::Tags { tags } => Query::Tags(tags),
    };

    handle_query(&indexes, &query, app.json, &mut io::stdout().lock())?;
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "fifa_index=info" } else { "fifa_index=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
