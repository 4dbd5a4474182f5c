use clap::Parser;
use memorec::cli::{Cli, Commands};
use memorec::types::config::Config;
use memorec::types::problem::Problem;
use memorec::{MemorecError, MemorecResult};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration first (no logging yet): missing file means defaults,
    // a broken one aborts before any command runs
    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Erro ao carregar {}: {}", cli.config.display(), e);
            std::process::exit(e.exit_code());
        }
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("memorec={}", log_level)
            .parse()
            .unwrap_or_else(|_| "memorec=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if cli.config.exists() {
        tracing::debug!("Configuration loaded from: {}", cli.config.display());
    } else {
        tracing::debug!("No configuration at {}, using defaults", cli.config.display());
    }

    if let Err(e) = run(cli, &config).await {
        // Erros de avaliação já foram impressos como resultado
        if !matches!(e, MemorecError::Eval(_)) {
            eprintln!("Erro: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, config: &Config) -> MemorecResult<()> {
    let json = cli.json;

    match cli.command {
        Commands::Factorial { n, max_depth } => {
            memorec::cli::commands::evaluate(Problem::factorial(n), max_depth, json, config).await
        }
        Commands::Fibonacci { n, max_depth } => {
            memorec::cli::commands::evaluate(Problem::fibonacci(n), max_depth, json, config).await
        }
        Commands::Search {
            target,
            values,
            max_depth,
        } => {
            let problem = Problem::binary_search(values, target);
            memorec::cli::commands::evaluate(problem, max_depth, json, config).await
        }
        Commands::Batch { input } => memorec::cli::commands::batch(&input, json, config).await,
        Commands::Init { path } => memorec::cli::commands::init(path).await,
        Commands::Version => {
            memorec::cli::commands::version();
            Ok(())
        }
    }
}
