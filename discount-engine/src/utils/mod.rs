//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 字段校验

pub mod logger;
pub mod validation;

pub use logger::init_logger_with_file;
