//! doubtgraph - interactive trust/doubt graph for social deduction games.

use clap::Parser;
use doubtgraph_cli::commands::Dispatcher;
use doubtgraph_cli::repl;
use doubtgraph_cli::{Cli, Command, Config, FileRoster, Formatter, Session};
use doubtgraph_render::DotRenderer;
use doubtgraph_resolver::AttendeeResolver;
use doubtgraph_service::{GraphService, RosterProvider, SessionContext};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> doubtgraph_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(roster) = cli.roster {
        config.roster_path = roster.into();
    }

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    tracing::info!(
        roster = %config.roster_path.display(),
        output_dir = %config.output_dir.display(),
        "Starting doubtgraph"
    );

    let roster: Arc<dyn RosterProvider> =
        Arc::new(FileRoster::new(&config.roster_path, config.fetch_limit));
    let resolver = AttendeeResolver::new(config.markers.clone());
    let service = Arc::new(GraphService::new(resolver, Arc::clone(&roster)));
    let renderer = Arc::new(DotRenderer::new(&config.output_dir));
    let dispatcher = Dispatcher::new(service, renderer, config.rank_limit);

    let mut session = Session::new(
        dispatcher,
        roster,
        SessionContext::new(config.guild.clone()),
        formatter,
    );
    if let Some(invoker) = cli.invoker {
        session = session.with_invoker(invoker.as_str());
    }

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut session, config.settings.history_size).await?;
        }
        Some(Command::Roster) => {
            println!("{}", session.roster().await?);
        }
    }

    Ok(())
}
