use anyhow::Context;
use awesome_tool::config::{Config, ConfigLoader};
use awesome_tool::format::{format_record, format_stats};
use awesome_tool::service::{AwesomeService, AwesomeServiceAsync};
use awesome_tool::validation::check_input;
use awesome_tool::ResultRecord;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, trace};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Validate, memoize and transform text items
#[derive(Parser)]
#[command(name = "awesome-tool")]
#[command(version, about = "Validate, memoize and transform text items", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through single and batch processing (default command)
    Demo,
    /// Process items as one batch and print a result per item
    Process {
        /// Items to process
        #[arg(required = true)]
        items: Vec<String>,

        /// Use the asynchronous service
        #[arg(long = "async")]
        use_async: bool,

        /// Render each result as a bordered block
        #[arg(long, conflicts_with = "json")]
        pretty: bool,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Check whether an input would be accepted
    Validate {
        /// Input to check
        input: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_filter = init_tracing(cli.verbose);

    let config = match ConfigLoader::new().load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if config.debug_mode() && cli.verbose == 0 && !log_filter.from_env {
        if let Err(e) = log_filter
            .handle
            .modify(|filter| *filter = EnvFilter::new("debug"))
        {
            eprintln!("Warning: failed to raise log level for debug mode: {e}");
        }
    }

    debug!("awesome-tool started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Demo) | None => {
            run_demo(config);
            Ok(())
        }
        Some(Commands::Process {
            items,
            use_async,
            pretty,
            json,
        }) => run_process(config, &items, use_async, pretty, json).await,
        Some(Commands::Validate { input }) => {
            if !run_validate(&input) {
                std::process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Handle to the installed log filter, adjusted once configuration is known
struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

fn init_tracing(verbose: u8) -> LogFilter {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(log_level), false),
    };
    let (filter_layer, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2)
                .with_line_number(verbose >= 2),
        )
        .init();

    LogFilter { handle, from_env }
}

fn run_demo(config: Config) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("awesome_tool - Basic Usage Example");
    println!("{rule}");
    println!();

    let mut service = AwesomeService::new(config);
    println!(
        "Initialized AwesomeService with database: {}",
        service.config().database_name()
    );
    println!();

    println!("Processing single item:");
    let single = match service.process("hello world") {
        Ok(record) => ResultRecord::Success(record),
        Err(err) => ResultRecord::Error {
            message: err.to_string(),
        },
    };
    println!("{}", format_record(&single, true));
    println!();

    println!("Processing batch:");
    let results = service.batch_process(&["first item", "second item", "third item"]);
    for (i, result) in results.iter().enumerate() {
        println!("\nItem {}:", i + 1);
        println!("{}", format_record(result, false));
    }

    println!("\nService Statistics:");
    println!("{}", format_stats(&service.get_stats()));
}

async fn run_process(
    config: Config,
    items: &[String],
    use_async: bool,
    pretty: bool,
    json: bool,
) -> anyhow::Result<()> {
    let results = if use_async {
        AwesomeServiceAsync::new(config).batch_process(items).await
    } else {
        AwesomeService::new(config).batch_process(items)
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{rendered}");
        return Ok(());
    }

    for result in &results {
        println!("{}", format_record(result, pretty));
    }
    Ok(())
}

fn run_validate(input: &str) -> bool {
    match check_input(input) {
        Ok(()) => {
            println!("valid");
            true
        }
        Err(reason) => {
            println!("invalid: {reason}");
            false
        }
    }
}
