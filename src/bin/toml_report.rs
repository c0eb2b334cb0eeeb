use clap::Parser;
use rsvp_emails::core::ConfigProvider;
use rsvp_emails::utils::{logger, validation::Validate};
use rsvp_emails::{LocalStorage, RosterEngine, RosterPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Roster report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "rsvp.toml")]
    config: String,

    /// Override the roster path from the config
    #[arg(short, long)]
    input: Option<String>,

    /// Override the query domain from the config
    #[arg(short, long)]
    domain: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be processed without reading the roster
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose || config.verbose());
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(input) = args.input {
        tracing::info!("🔧 Input overridden to: {}", input);
        config.input.path = Some(input);
    }
    if let Some(domain) = args.domain {
        tracing::info!("🔧 Domain overridden to: {}", domain);
        config.query.domain = Some(domain);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        println!("🔍 Dry run: no roster read, no report written.");
        return Ok(());
    }

    let pipeline = RosterPipeline::new(LocalStorage::default(), config);
    let engine = RosterEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Report written to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Roster report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Input: {} ({})", config.input_path(), config.input_format());
    if config.input_format() == "csv" {
        println!("  CSV column: {}", config.csv_column());
    }
    if let Some(domain) = config.target_domain() {
        println!("  Domain query: {}", domain);
    }
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!();
}
