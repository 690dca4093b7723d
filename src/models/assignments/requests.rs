use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::params::{deserialize_id_list, unique_ids};
use crate::utils::validate::validate_capability;

/// 获取作业列表请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentsRequest {
    /// 为空表示返回所有已选课程
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub courseids: Vec<i64>,
    /// 课程上下文中必须全部具备的额外权限
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl AssignmentsRequest {
    pub fn validated(self) -> Result<Self, String> {
        for capability in &self.capabilities {
            validate_capability(capability)?;
        }
        Ok(Self {
            courseids: unique_ids(self.courseids),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_accepted() {
        let req: AssignmentsRequest = serde_json::from_str("{}").unwrap();
        let req = req.validated().unwrap();
        assert!(req.courseids.is_empty());
        assert!(req.capabilities.is_empty());
    }

    #[test]
    fn test_malformed_capability_is_rejected() {
        let req: AssignmentsRequest =
            serde_json::from_str(r#"{"capabilities": ["mod/assign:grade", "grade"]}"#).unwrap();
        assert!(req.validated().is_err());
    }
}
