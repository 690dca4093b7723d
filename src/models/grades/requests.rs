use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::params::{deserialize_id_list, deserialize_string_to_i64, unique_ids};
use crate::utils::validate::validate_timestamp;

/// 获取评分请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct GradesRequest {
    #[serde(deserialize_with = "deserialize_id_list")]
    pub assignmentids: Vec<i64>,
    /// 仅返回 timemodified >= since 的记录
    #[serde(default, deserialize_with = "deserialize_string_to_i64")]
    pub since: i64,
}

impl GradesRequest {
    pub fn validated(self) -> Result<Self, String> {
        validate_timestamp("since", self.since)?;
        Ok(Self {
            assignmentids: unique_ids(self.assignmentids),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_defaults_to_zero() {
        let req: GradesRequest = serde_json::from_str(r#"{"assignmentids": [2, 1, 2]}"#).unwrap();
        let req = req.validated().unwrap();
        assert_eq!(req.assignmentids, vec![2, 1]);
        assert_eq!(req.since, 0);
    }

    #[test]
    fn test_missing_assignment_ids_is_rejected() {
        assert!(serde_json::from_str::<GradesRequest>(r#"{"since": 5}"#).is_err());
    }

    #[test]
    fn test_negative_since_is_rejected() {
        let req: GradesRequest =
            serde_json::from_str(r#"{"assignmentids": [1], "since": -1}"#).unwrap();
        assert!(req.validated().is_err());
    }
}
