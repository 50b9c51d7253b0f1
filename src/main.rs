use clap::Parser;
use secret_code::config::Command;
use secret_code::utils::logger;
use secret_code::{Cipher, CliConfig, Session, ShiftCipher};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let cipher = ShiftCipher;

    match config.command {
        Some(Command::Encode { shift, message }) => {
            tracing::debug!("Encoding {} chars with shift {}", message.chars().count(), shift);
            println!("{}", cipher.encode(&message, shift));
        }
        Some(Command::Decode { shift, message }) => {
            tracing::debug!("Decoding {} chars with shift {}", message.chars().count(), shift);
            println!("{}", cipher.decode(&message, shift));
        }
        None => run_interactive(cipher),
    }

    Ok(())
}

fn run_interactive(cipher: ShiftCipher) {
    tracing::info!("🔐 Starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(cipher, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Session finished: {} encoded, {} decoded, {} invalid inputs",
                summary.encoded,
                summary.decoded,
                summary.invalid_inputs
            );
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
