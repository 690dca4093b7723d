use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::params::{deserialize_id_list, unique_ids};

/// 获取用户标记请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserFlagsRequest {
    #[serde(deserialize_with = "deserialize_id_list")]
    pub assignmentids: Vec<i64>,
}

impl UserFlagsRequest {
    pub fn validated(self) -> Result<Self, String> {
        Ok(Self {
            assignmentids: unique_ids(self.assignmentids),
        })
    }
}
