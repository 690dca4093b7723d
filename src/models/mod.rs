//! 数据模型定义
//!
//! - `entities`: 业务实体（由存储层从数据库实体转换而来）
//! - `requests`: 请求参数及其校验
//! - `responses`: 对外返回的结构

pub mod assignments;
pub mod common;
pub mod grades;
pub mod submissions;
pub mod user_flags;
pub mod user_mappings;
pub mod users;
pub mod warnings;

use serde::{Deserialize, Serialize};

pub use common::lookup::{ChildRecord, ResultGroup};
pub use common::response::ApiResponse;
pub use warnings::{Warning, WarningCode, WarningItem};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码，写入 ApiResponse.code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 5000,
}
