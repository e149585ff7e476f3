use brdoc::app::{check_all, report};
use brdoc::utils::error::BrdocError;
use brdoc::utils::{logger, validation::Validate};
use brdoc::{CliConfig, FileConfig, Settings, ValidationEngine};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!(
        "CLI config: kind={:?}, format={:?}, config={:?}, {} inputs",
        config.kind,
        config.format,
        config.config,
        config.inputs.len()
    );

    match run(&config) {
        Ok(all_valid) => {
            if !all_valid {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ brdoc failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 1 保留給「有無效輸入」，其餘錯誤 (含讀不到設定檔) 一律為 2
            std::process::exit(2);
        }
    }
}

/// 回傳是否所有輸入都有效
fn run(config: &CliConfig) -> Result<bool, BrdocError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(FileConfig::from_file(path)?)
        }
        None => None,
    };

    let settings = Settings::resolve(config.kind, config.format, file_config.as_ref());
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = ValidationEngine::new();
    let outcomes = check_all(&engine, &settings, &config.inputs);

    println!("{}", report::render(&outcomes, &settings)?);

    let invalid = outcomes.iter().filter(|o| !o.valid).count();
    if invalid > 0 {
        tracing::info!("{} of {} inputs invalid", invalid, outcomes.len());
    }

    Ok(invalid == 0)
}
