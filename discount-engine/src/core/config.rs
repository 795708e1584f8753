use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use std::str::FromStr;

use crate::membership::tier::{
    DEFAULT_BRONZE_THRESHOLD, DEFAULT_GOLD_THRESHOLD, DEFAULT_SILVER_THRESHOLD,
};
use crate::membership::{MembershipDiscounts, TierThresholds};

/// 快照过期阈值默认值 (5 分钟)
pub const DEFAULT_STALE_AFTER_MS: i64 = 300_000;

/// 引擎配置 - 会员等级阈值、会员折扣、快照过期与日志
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件由 `dotenv` 加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | TIER_BRONZE_THRESHOLD | 0 | 铜卡最低累计消费 (VND) |
/// | TIER_SILVER_THRESHOLD | 1000000 | 银卡最低累计消费 (VND) |
/// | TIER_GOLD_THRESHOLD | 3000000 | 金卡最低累计消费 (VND) |
/// | MEMBER_DISCOUNT_BRONZE | 3 | 铜卡会员折扣 (%) |
/// | MEMBER_DISCOUNT_SILVER | 5 | 银卡会员折扣 (%) |
/// | MEMBER_DISCOUNT_GOLD | 10 | 金卡会员折扣 (%) |
/// | SNAPSHOT_STALE_AFTER_MS | 300000 | 目录快照过期时间 (毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 是否输出 JSON 格式日志 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// TIER_GOLD_THRESHOLD=5000000 LOG_LEVEL=debug discount-engine tier --total-spent 4200000
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 会员等级阈值
    pub thresholds: TierThresholds,
    /// 各等级会员折扣百分比
    pub member_discounts: MembershipDiscounts,
    /// 快照超过该时长 (毫秒) 视为过期
    pub stale_after_ms: i64,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub log_json: bool,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；设置了但无法解析的变量返回 `ConfigError`
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            thresholds: TierThresholds {
                bronze: env_or("TIER_BRONZE_THRESHOLD", DEFAULT_BRONZE_THRESHOLD)?,
                silver: env_or("TIER_SILVER_THRESHOLD", DEFAULT_SILVER_THRESHOLD)?,
                gold: env_or("TIER_GOLD_THRESHOLD", DEFAULT_GOLD_THRESHOLD)?,
            },
            member_discounts: {
                let defaults = MembershipDiscounts::default();
                MembershipDiscounts {
                    bronze: env_or("MEMBER_DISCOUNT_BRONZE", defaults.bronze)?,
                    silver: env_or("MEMBER_DISCOUNT_SILVER", defaults.silver)?,
                    gold: env_or("MEMBER_DISCOUNT_GOLD", defaults.gold)?,
                }
            },
            stale_after_ms: env_or("SNAPSHOT_STALE_AFTER_MS", DEFAULT_STALE_AFTER_MS)?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false)?,
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
        })
    }

    /// 使用自定义阈值和折扣覆盖默认配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(thresholds: TierThresholds, member_discounts: MembershipDiscounts) -> Self {
        Self {
            thresholds,
            member_discounts,
            ..Self::default()
        }
    }

    /// 校验配置一致性
    pub fn validate(&self) -> AppResult<()> {
        self.thresholds.validate()?;
        self.member_discounts.validate()?;
        if self.stale_after_ms < 0 {
            return Err(AppError::with_message(
                ErrorCode::ConfigError,
                format!(
                    "SNAPSHOT_STALE_AFTER_MS must not be negative, got {}",
                    self.stale_after_ms
                ),
            ));
        }
        Ok(())
    }
}

/// 内置默认值 (不读取环境变量)
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            member_discounts: MembershipDiscounts::default(),
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim().parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::ConfigError,
            format!("{key} has an invalid value: {raw:?}"),
        )
        .with_detail("variable", key)
    })
}
