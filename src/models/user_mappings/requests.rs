use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::params::{deserialize_id_list, unique_ids};

/// 获取匿名映射请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserMappingsRequest {
    #[serde(deserialize_with = "deserialize_id_list")]
    pub assignmentids: Vec<i64>,
}

impl UserMappingsRequest {
    pub fn validated(self) -> Result<Self, String> {
        Ok(Self {
            assignmentids: unique_ids(self.assignmentids),
        })
    }
}
