use anyhow::Context;
use clap::Parser;
use substance_converter::utils::{logger, validation::Validate};
use substance_converter::{CliConfig, ErrorSeverity, JsonFileStorage, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = JsonFileStorage::new(&config.store);
    tracing::info!("Using substance database at {}", storage.path().display());
    let result = Session::open(storage).and_then(|mut session| {
        let stdin = std::io::stdin();
        session.run(stdin.lock(), std::io::stdout())
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ Session failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    std::io::Write::flush(&mut std::io::stdout()).context("Failed to flush stdout")?;
    Ok(())
}
