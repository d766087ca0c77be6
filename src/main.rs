use caesar_shell::utils::{logger, validation::Validate};
use caesar_shell::{CipherError, CliArgs, Console, LocalStorage, Shell};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(
        args.verbose,
        config.logging.filter.as_deref(),
        config.logging.format,
    );
    tracing::debug!("Shell config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let storage = LocalStorage::new(&config.base_dir);

    let mut shell = Shell::new(console, storage, &config.output_path).with_banner(config.banner);

    match shell.run() {
        Ok(summary) => {
            tracing::info!(
                "Done: {} cycles, {} files written",
                summary.cycles,
                summary.files_written
            );
            Ok(())
        }
        Err(CipherError::InputClosed) => {
            tracing::warn!("Console input closed before the session ended");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Shell stopped: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
