//! 逐项警告
//!
//! 权限不足、未选课或无记录都不会让整个请求失败，而是作为警告随成功响应一起返回。

use serde::{Serialize, Serializer};
use ts_rs::TS;

/// 警告所指向的对象类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "assign.ts")]
pub enum WarningItem {
    Assignment,
    Course,
    Module,
}

/// 警告码，序列化为字符串 "1" / "2" / "3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    NoAccess,
    NotEnrolled,
    NotFound,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::NoAccess => "1",
            WarningCode::NotEnrolled => "2",
            WarningCode::NotFound => "3",
        }
    }
}

impl Serialize for WarningCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct Warning {
    pub item: WarningItem,
    pub itemid: i64,
    #[ts(type = "string")]
    pub warningcode: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn new(
        item: WarningItem,
        itemid: i64,
        warningcode: WarningCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            item,
            itemid,
            warningcode,
            message: message.into(),
        }
    }

    pub fn no_access(item: WarningItem, itemid: i64, message: impl Into<String>) -> Self {
        Self::new(item, itemid, WarningCode::NoAccess, message)
    }

    pub fn not_enrolled(item: WarningItem, itemid: i64, message: impl Into<String>) -> Self {
        Self::new(item, itemid, WarningCode::NotEnrolled, message)
    }

    pub fn not_found(item: WarningItem, itemid: i64, message: impl Into<String>) -> Self {
        Self::new(item, itemid, WarningCode::NotFound, message)
    }
}
