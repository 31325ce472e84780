use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typequiz::cli::{Cli, Commands};
use typequiz::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // init does not need an existing config
    if let Commands::Init { force } = cli.command {
        return commands::init_config(force);
    }

    let config = commands::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Take { seed, plain } => commands::take_quiz(seed, plain, &config),
        Commands::Score {
            answers,
            format,
            plain,
        } => commands::score_answers(&answers, format, plain, &config),
        Commands::Sequence { seed, bank } => {
            commands::print_sequence(seed, bank.as_deref(), &config)
        }
        Commands::Init { .. } => Ok(()),
    }
}

// `log` records go through env_logger, session spans through tracing-subscriber.
// Both honor RUST_LOG.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        log::debug!("tracing subscriber already installed");
    }
}
