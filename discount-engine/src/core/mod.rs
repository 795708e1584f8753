//! 核心模块 - 配置与校验错误
//!
//! - [`EngineConfig`] - 引擎配置
//! - [`ValidationError`] / [`ValidationErrors`] - 构造期校验错误

pub mod config;
pub mod error;

pub use config::{DEFAULT_STALE_AFTER_MS, EngineConfig};
pub use error::{FieldError, ValidationError, ValidationErrors};

use shared::error::AppResult;

/// 加载 `.env`、读取配置、初始化日志、校验配置
///
/// CLI 启动时调用一次。日志先于校验初始化，校验失败可以写入日志
pub fn setup_environment() -> AppResult<EngineConfig> {
    dotenv::dotenv().ok();

    let config = EngineConfig::from_env()?;

    crate::utils::init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    config.validate().inspect_err(|err| {
        tracing::error!(code = %err.code, "Invalid engine configuration: {}", err.message);
    })?;
    tracing::debug!(stale_after_ms = config.stale_after_ms, "Engine configuration loaded");

    Ok(config)
}
