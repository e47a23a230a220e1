use api_url_rewriter::utils::logger;
use api_url_rewriter::{app, CliConfig};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // Logging
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // Load rules, rewrite, confirm
    let mut stdout = std::io::stdout();
    if let Err(e) = app::run(&cli, &mut stdout) {
        tracing::error!("❌ Rewrite failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        // Every failure is fatal
        std::process::exit(e.exit_code());
    }
}
