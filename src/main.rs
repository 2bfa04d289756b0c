use clap::Parser;
use qr_badge_etl::utils::{logger, validation::Validate};
use qr_badge_etl::{BadgePipeline, CliConfig, EtlEngine, LocalStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting qr-badge-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let output_dir = config.output_dir.clone();

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = BadgePipeline::new(storage, config);

    // 創建引擎並運行
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ QR badge batch completed successfully!");
            println!("✅ QR codes generated and saved in {}", output_dir);
            println!(
                "📁 New spreadsheet with QR code paths and IDs saved as {}",
                output_path
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ QR badge batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                qr_badge_etl::utils::error::ErrorSeverity::Low => 0,
                qr_badge_etl::utils::error::ErrorSeverity::Medium => 2,
                qr_badge_etl::utils::error::ErrorSeverity::High => 1,
                qr_badge_etl::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
