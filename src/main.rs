use asset_mover::utils::logger;
use asset_mover::RelocatorConfig;
use clap::Parser;

/// Moves the hashed webview bundles into `media/` as `main.js` and `styles.css`.
#[derive(Debug, Parser)]
#[command(name = "asset-mover", version)]
#[command(about = "Moves webview build bundles into the media directory")]
#[command(after_help = "Only warnings are logged by default; set RUST_LOG=asset_mover=debug to trace each step.")]
struct Args {}

fn main() {
    let _args = Args::parse();

    logger::init_cli_logger();

    let config = RelocatorConfig::default();
    tracing::debug!("Layout: {:?}", config);

    match asset_mover::relocate(config) {
        Ok(report) => {
            tracing::debug!("Relocation report: {:?}", report);
        }
        Err(e) => {
            tracing::error!("Relocation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("   {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
