//! Discount Engine - 优惠券与会员权益资格判定
//!
//! # 架构概述
//!
//! 给定目录快照 (coupons + bonus services) 和一个主体 (role × membership tier)，
//! 判定每个优惠工具是否适用、是否可兑换以及折扣金额。纯函数、无状态、不做 I/O；
//! 唯一的 I/O 入口是 `discount-engine` 命令行。
//!
//! # 模块结构
//!
//! ```text
//! discount-engine/src/
//! ├── core/          # 配置、校验错误
//! ├── audience/      # 受众规则 (role × tier) 规范化与校验
//! ├── catalog/       # payload → 领域模型映射、目录快照
//! ├── eligibility/   # 资格匹配、折扣计算、可兑换性、引擎
//! ├── membership/    # 会员等级阈值、会员折扣、报价
//! ├── models/        # 领域模型
//! ├── money/         # Decimal 金额计算
//! ├── utils/         # 日志、字段校验
//! ├── session.rs     # 显式会话上下文
//! └── cli.rs         # 命令行
//! ```

pub mod audience;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod eligibility;
pub mod membership;
pub mod models;
pub mod money;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use audience::{AudienceDraft, AudienceRule, TierSet, validate_audience_rule};
pub use catalog::{CatalogSnapshot, MappedCatalog, Rejected, map_bonus_service, map_coupon};
pub use crate::core::{EngineConfig, ValidationError, ValidationErrors, setup_environment};
pub use eligibility::{
    Decision, EligibilityEngine, RedeemStatus, StaleStateWarning, compute_discount, is_eligible,
    is_redeemable, redeem_status,
};
pub use membership::{MembershipDiscounts, Quote, TierThresholds, membership_discount, quote};
pub use models::{BonusService, Coupon, DiscountInstrument, InstrumentKind, Subject};
pub use session::SessionContext;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
