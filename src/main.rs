use aiscout_loggen::{spawn_signal_handlers, LogGenerator, LoggenConfig, RecordSynthesizer};
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "aiscout-loggen")]
#[command(about = "Synthetic AiScout camera telemetry generator")]
#[command(version)]
#[command(long_about = "Appends synthetic AiScout detection, system, error and performance \
records to a shared JSON-lines log file at a fixed rate, for exercising log-collection \
pipelines. Runs until SIGINT or SIGTERM, then finishes the current record and exits.")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "loggen.toml", help = "Path to TOML configuration file")]
    config: String,

    /// Enable debug logging (most verbose)
    #[arg(short, long, help = "Enable debug level logging")]
    debug: bool,

    /// Include module targets in log lines
    #[arg(short, long, help = "Include module targets in compact log output")]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, help = "Enable quiet mode - only log errors")]
    quiet: bool,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration file and exit without generating logs")]
    validate_config: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in TOML format and exit")]
    print_config: bool,

    /// Dry run mode - print one sample record instead of writing
    #[arg(long, help = "Print one synthesized record to stdout and exit without writing")]
    dry_run: bool,

    /// Override log format (json, pretty, compact)
    #[arg(long, value_name = "FORMAT", help = "Log output format: json, pretty, or compact")]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle special modes that don't require full initialization
    if args.print_config {
        print_default_config()?;
        return Ok(());
    }

    init_logging(&args)?;

    info!("Starting AiScout log generator v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration file: {}", args.config);

    let config = match LoggenConfig::load_from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        if args.validate_config {
            eprintln!("✗ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
        return Err(e.into());
    }

    if args.validate_config {
        info!("Configuration validation successful");
        println!("✓ Configuration is valid");
        return Ok(());
    }

    if args.dry_run {
        let mut synthesizer = match config.generation.seed {
            Some(seed) => RecordSynthesizer::seeded(seed),
            None => RecordSynthesizer::from_entropy(),
        };
        println!("{}", synthesizer.synthesize().to_json_line()?);
        info!(
            "Dry run complete - would write to {}",
            config.output.log_path().display()
        );
        return Ok(());
    }

    let mut generator = LogGenerator::from_config(&config)?;

    generator.sink().prepare().await.map_err(|e| {
        error!(
            "Failed to prepare log directory {}: {}",
            config.output.log_dir, e
        );
        e
    })?;

    spawn_signal_handlers(generator.state());

    let summary = generator.run().await.map_err(|e| {
        error!("Log generation failed: {}", e);
        e
    })?;

    info!(
        "Wrote {} records ({} dropped) in {:.1}s",
        summary.records_written,
        summary.write_failures,
        summary.elapsed.as_secs_f64()
    );

    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Progress lines are info level, so that is the default
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aiscout_loggen={}", log_level)));

    let fmt_layer = match args.log_format.as_deref() {
        Some("json") => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        Some("pretty") => fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(args.debug)
            .with_file(args.debug)
            .with_line_number(args.debug)
            .boxed(),
        Some("compact") | None => fmt::layer()
            .compact()
            .with_target(args.verbose || args.debug)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        Some(format) => {
            eprintln!("Warning: Unknown log format '{}', using default", format);
            fmt::layer().compact().with_target(false).boxed()
        }
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Print default configuration in TOML format
fn print_default_config() -> Result<()> {
    println!("# AiScout log generator configuration");
    println!("# LOG_DIR and LOG_RATE override output.log_dir and generation.rate;");
    println!("# any key can also be set as LOGGEN_<SECTION>__<KEY>.");
    println!("# generation.seed = 42 makes the record stream reproducible.");
    println!();
    let rendered = toml::to_string_pretty(&LoggenConfig::default())
        .map_err(aiscout_loggen::LoggenError::from)?;
    println!("{}", rendered);
    Ok(())
}
