use clap::Parser;
use small_utils::utils::error::ErrorSeverity;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{CliArgs, CommandRunner, LogFormat, UtilsConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置
    let config = match &args.config {
        Some(path) => match UtilsConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => UtilsConfig::default(),
    };

    // 初始化日誌
    let verbose = args.verbose || config.verbose();
    if args.json_logs || config.log_format() == LogFormat::Json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut runner = CommandRunner::new(&config)?;

    match runner.run(&args.command).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::debug!(
                "command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            if verbose {
                eprintln!("💡 {}", e.recovery_suggestion());
            }

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
