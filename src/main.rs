use clap::Parser;
use rsvp_emails::utils::{logger, validation::Validate};
use rsvp_emails::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rsvp-emails CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let pipeline = RosterPipeline::new(LocalStorage::default(), config);
    let engine = RosterEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Report written to: {}", output_path);
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

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
