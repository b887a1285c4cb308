use anyhow::Result;
use clap::Parser;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

use securelink::{
    spawn_notification_log, ApiServerBuilder, EventBus, OpsConsole, SecurelinkConfig,
};

#[derive(Parser, Debug)]
#[command(name = "securelink")]
#[command(about = "Security operations center with camera, incident, and location management")]
#[command(version)]
#[command(long_about = "A security operations center that tracks camera feeds, security \
incidents, and monitored locations, and serves the console state to rendering layers over a \
JSON API. Session data is seeded at startup and lives in memory only.")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "securelink.toml", help = "Path to TOML configuration file")]
    config: String,

    /// Enable debug logging (most verbose)
    #[arg(short, long, help = "Enable debug level logging")]
    debug: bool,

    /// Enable verbose logging (info level)
    #[arg(short, long, help = "Enable verbose info level logging")]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, help = "Enable quiet mode - only log errors")]
    quiet: bool,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration file and exit without starting the console")]
    validate_config: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in TOML format and exit")]
    print_config: bool,

    /// Dry run mode - seed the console but don't serve
    #[arg(long, help = "Perform dry run - seed the console but don't start the API server")]
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

    // Initialize logging
    init_logging(&args)?;

    info!("Starting SecureLink console v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration file: {}", args.config);

    // Load and validate configuration
    let config = match SecurelinkConfig::load_from_file(&args.config) {
        Ok(config) => {
            info!("Configuration loaded successfully from: {}", args.config);
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if args.validate_config {
        match config.validate() {
            Ok(()) => {
                info!("Configuration validation successful");
                println!("✓ Configuration is valid");
                return Ok(());
            }
            Err(e) => {
                error!("Configuration validation failed: {}", e);
                eprintln!("✗ Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    config.validate()?;
    info!("SecureLink configuration loaded and validated");

    // Wire up the event bus and seed the console session
    let event_bus = Arc::new(if config.system.debug_events {
        EventBus::with_debug_logging(config.system.event_bus_capacity)
    } else {
        EventBus::new(config.system.event_bus_capacity)
    });
    let notification_log = spawn_notification_log(&event_bus);

    let console = Arc::new(RwLock::new(OpsConsole::new(&config, Arc::clone(&event_bus))));

    if args.dry_run {
        info!("Dry run mode - console seeded but API server not started");
        println!("✓ Dry run completed successfully - console seeded");
        return Ok(());
    }

    let server = ApiServerBuilder::new()
        .config(config.api.clone())
        .console(console)
        .event_bus(event_bus)
        .build()
        .map_err(|e| {
            error!("Failed to build API server: {}", e);
            e
        })?;

    server.start().await.map_err(|e| {
        error!("System error during execution: {}", e);
        e
    })?;

    notification_log.abort();
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Determine log level based on flags
    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    // Create environment filter
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("securelink={}", log_level)));

    // Configure format based on options
    let fmt_layer = match args.log_format.as_deref() {
        Some("json") => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        Some("compact") => fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        Some("pretty") | None => fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(args.debug)
            .with_file(args.debug)
            .with_line_number(args.debug)
            .boxed(),
        Some(format) => {
            eprintln!("Warning: Unknown log format '{}', using default", format);
            fmt::layer()
                .with_target(true)
                .with_thread_ids(args.debug)
                .with_file(args.debug)
                .with_line_number(args.debug)
                .boxed()
        }
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();

    Ok(())
}

/// Print default configuration in TOML format
fn print_default_config() -> Result<()> {
    println!("# SecureLink Configuration File");
    println!("# This is the default configuration with all available options");
    println!();
    println!("{}", toml::to_string_pretty(&SecurelinkConfig::default())?);
    Ok(())
}
