use clap::Parser;
use secret_code::utils::{
    logger,
    validation::{self, Validate},
};
use secret_code::{
    LocalStorage, ReportBuilder, ReportConfig, ReportFormat, ReportWriter, ShiftCipher,
};
use std::path::Path;

#[derive(Parser)]
#[command(name = "secret-report")]
#[command(about = "Generate the Secret Code Generator report with source listing and samples")]
struct Args {
    /// Path to TOML configuration file (built-in defaults when missing)
    #[arg(short, long, default_value = "report-config.toml")]
    config: String,

    /// Override the output directory from config
    #[arg(short, long)]
    output: Option<String>,

    /// Override the report title
    #[arg(short, long)]
    title: Option<String>,

    /// Override the output formats (markdown, text, json, csv)
    #[arg(short, long = "format")]
    formats: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show what would be written without writing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting report generator");

    // 載入 TOML 配置，檔案不存在時使用預設值
    let mut config = if Path::new(&args.config).exists() {
        tracing::info!("📁 Loading configuration from: {}", args.config);
        match ReportConfig::from_file(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
                eprintln!("💡 Make sure the file is valid TOML format");
                std::process::exit(1);
            }
        }
    } else {
        tracing::info!("📁 No config at {}, using built-in defaults", args.config);
        ReportConfig::default()
    };

    // 應用命令列覆蓋設定
    if let Some(output) = &args.output {
        config.output.output_path = output.clone();
        tracing::info!("🔧 Output path overridden to: {}", output);
    }
    if !args.formats.is_empty() {
        config.output.formats = args.formats.clone();
        tracing::info!("🔧 Formats overridden to: {}", args.formats.join(", "));
    }

    // 驗證配置
    let validated = config.validate().and_then(|_| match &args.title {
        Some(title) => validation::validate_non_empty_string("--title", title),
        None => Ok(()),
    });
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let formats = config.formats()?;
    display_config_summary(&config, &formats, args.title.as_deref(), args.dry_run);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return Ok(());
    }

    let mut builder = ReportBuilder::from_config(ShiftCipher, &config);
    if let Some(title) = &args.title {
        tracing::info!("🔧 Title overridden to: {}", title);
        builder = builder.with_title(title.clone());
    }
    let report = builder.build();
    tracing::debug!("Built report with {} samples", report.samples.len());

    let storage = LocalStorage::new(config.output_path().to_string());
    let writer = ReportWriter::new(storage, config.output.filename.clone())
        .with_archive(config.archive_filename().map(str::to_string));

    match writer.write(&report, &formats) {
        Ok(outcome) => {
            if outcome.fallback_used {
                println!("⚠️ Some formats failed; a plain-text report was written instead");
            }
            for name in &outcome.written {
                println!("📁 {}", writer.storage().full_path(name).display());
            }
            if let Some(archive) = &outcome.archive {
                println!("📦 {}", writer.storage().full_path(archive).display());
            }
            tracing::info!("✅ Report generated successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Report generation failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(
    config: &ReportConfig,
    formats: &[ReportFormat],
    title: Option<&str>,
    dry_run: bool,
) {
    println!("📋 Report Summary:");
    println!("  Title: {}", title.unwrap_or(&config.report.title));
    println!("  Output: {}", config.output_path());
    println!(
        "  Files: {}",
        formats
            .iter()
            .map(|f| format!("{}.{}", config.output.filename, f.extension()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    if let Some(archive) = config.archive_filename() {
        println!("  Compression: {} (ZIP)", archive);
    }

    println!("  Samples:");
    for (message, shift) in config.samples() {
        println!("    {:?} (shift {})", message, shift);
    }

    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
