use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use paper_hunter::config::{
    default_config_path, find_config_file, load_config, write_default_config, Config,
};
use paper_hunter::ui::{self, SpinnerProgress, Status};
use paper_hunter::utils::ProgressSink;
use paper_hunter::{print_status, ConferenceRegistry, PaperHunter, SearchRequest, StrategyKind};
use std::path::PathBuf;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paper Hunter - Find conference papers on DBLP by venue, year and keyword
#[derive(Parser, Debug)]
#[command(name = "paper-hunter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find conference papers on DBLP by venue, year and keyword", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the configuration)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search conference papers by keyword
    #[command(alias = "s")]
    Search {
        /// Conference abbreviations or aliases, comma separated ("all" for every conference)
        #[arg(long, short, required = true, value_delimiter = ',', num_args = 1..)]
        conferences: Vec<String>,

        /// Years or inclusive ranges such as 2020-2023 (default: current year)
        #[arg(long, short, value_delimiter = ',', num_args = 1..)]
        years: Vec<String>,

        /// Keep titles matching at least one of these patterns
        #[arg(long = "keyword", short = 'k', num_args = 1..)]
        keywords_any: Vec<String>,

        /// Keep only titles matching every one of these patterns
        #[arg(long = "require", short = 'a', num_args = 1..)]
        keywords_all: Vec<String>,

        /// Locate strategy (overrides the configuration)
        #[arg(long, short)]
        strategy: Option<StrategyKind>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
        output: OutputFormat,
    },

    /// List known conferences
    #[command(alias = "confs")]
    Conferences {
        /// Also list aliases
        #[arg(long)]
        aliases: bool,
    },

    /// Show how conference tokens resolve
    Resolve {
        /// Tokens to resolve
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Write a configuration file with every default filled in
    Init {
        /// Destination (default: the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let mut config = load_config(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("Failed to load config file {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout.max(1);
    }

    init_logging(&cli, &config);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    match cli.command {
        Some(Commands::Search {
            conferences,
            years,
            keywords_any,
            keywords_all,
            strategy,
            output,
        }) => {
            if let Some(strategy) = strategy {
                config.source.strategy = strategy;
            }
            let years = parse_years(&years, current_year())?;
            let request = SearchRequest::new(conferences)
                .years(years)
                .keywords_any(keywords_any)
                .keywords_all(keywords_all);

            run_search(&config, &request, output, cli.quiet).await?;
        }

        Some(Commands::Conferences { aliases }) => {
            let registry = ConferenceRegistry::new();
            println!("{}", ui::render_conferences(&registry, aliases));
            if !cli.quiet {
                print_status!(
                    Status::Info,
                    format!(
                        "{} conferences, {} aliases",
                        registry.len(),
                        registry.aliases().len()
                    )
                );
            }
        }

        Some(Commands::Resolve { tokens }) => {
            let registry = ConferenceRegistry::new();
            let mut unknown = Vec::new();
            for token in &tokens {
                match registry.resolve(token) {
                    Ok(entry) => println!(
                        "{} -> {} ({})",
                        token, entry.abbreviation, entry.display_name
                    ),
                    Err(_) => {
                        println!("{} -> unknown", token);
                        unknown.push(token.as_str());
                    }
                }
            }
            if !unknown.is_empty() {
                bail!("Unknown conferences: {}", unknown.join(", "));
            }
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path, force } => {
                let path = match path.or_else(default_config_path) {
                    Some(path) => path,
                    None => bail!("No config directory on this platform; pass --path"),
                };
                write_default_config(&path, force)?;
                print_status!(
                    Status::Success,
                    format!("Wrote default configuration to {}", path.display())
                );
            }
            ConfigCommands::Show => {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "paper-hunter",
                &mut std::io::stdout(),
            );
        }

        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Initialize tracing on stderr; `RUST_LOG` wins over flags and config
fn init_logging(cli: &Cli, config: &Config) {
    let level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config.logging.level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("paper_hunter={}", level)));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_search(
    config: &Config,
    request: &SearchRequest,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let hunter = PaperHunter::from_config(config)?;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let spinner = if quiet || !std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        SpinnerProgress::hidden()
    } else {
        SpinnerProgress::new()
    };

    let started = Instant::now();
    let result = hunter
        .search_with_cancel(request, &spinner as &dyn ProgressSink, cancel)
        .await;
    spinner.finish();
    let report = result?;

    let format = match format {
        OutputFormat::Auto if ui::is_terminal() => OutputFormat::Table,
        OutputFormat::Auto => OutputFormat::Json,
        other => other,
    };
    match format {
        OutputFormat::Json => println!("{}", ui::render_json(&report.records)?),
        OutputFormat::Plain => print!("{}", ui::render_plain(&report.records)),
        _ => {
            if !report.records.is_empty() {
                println!("{}", ui::render_table(&report.records, ui::terminal_width()));
            }
        }
    }

    if !quiet {
        ui::print_report_summary(&report, started.elapsed());
    }
    Ok(())
}

fn current_year() -> u16 {
    u16::try_from(chrono::Local::now().year()).unwrap_or(u16::MAX)
}

/// Expand year arguments such as `2023` or `2020-2022`, keeping the given order
fn parse_years(specs: &[String], default_year: u16) -> Result<Vec<u16>> {
    if specs.is_empty() {
        return Ok(vec![default_year]);
    }

    let mut years = Vec::new();
    for spec in specs {
        let spec = spec.trim();
        if spec.is_empty() {
            continue;
        }
        match spec.split_once('-') {
            Some((from, to)) => {
                let from: u16 = from
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid year range '{}'", spec))?;
                let to: u16 = to
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid year range '{}'", spec))?;
                if from > to {
                    bail!("Year range '{}' runs backwards", spec);
                }
                years.extend(from..=to);
            }
            None => years.push(
                spec.parse()
                    .with_context(|| format!("Invalid year '{}'", spec))?,
            ),
        }
    }

    if years.is_empty() {
        years.push(default_year);
    }
    Ok(years)
}
