use serde::Deserialize;
use ts_rs::TS;

use super::entities::SubmissionFilter;
use crate::models::common::params::{deserialize_id_list, deserialize_string_to_i64, unique_ids};
use crate::utils::validate::{validate_alpha, validate_timestamp};

/// 获取提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct SubmissionsRequest {
    #[serde(deserialize_with = "deserialize_id_list")]
    pub assignmentids: Vec<i64>,
    /// 仅返回该状态的提交，空串表示不过滤
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_string_to_i64")]
    pub since: i64,
    /// 非 0 时与 since 组成闭区间
    #[serde(default, deserialize_with = "deserialize_string_to_i64")]
    pub before: i64,
}

impl SubmissionsRequest {
    pub fn validated(self) -> Result<Self, String> {
        validate_alpha("status", &self.status)?;
        validate_timestamp("since", self.since)?;
        validate_timestamp("before", self.before)?;
        Ok(Self {
            assignmentids: unique_ids(self.assignmentids),
            ..self
        })
    }

    pub fn filter(&self) -> SubmissionFilter {
        SubmissionFilter {
            status: (!self.status.is_empty()).then(|| self.status.clone()),
            since: self.since,
            before: (self.before != 0).then_some(self.before),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_open_filter() {
        let req: SubmissionsRequest =
            serde_json::from_str(r#"{"assignmentids": [5, 6]}"#).unwrap();
        let req = req.validated().unwrap();
        assert_eq!(req.filter(), SubmissionFilter::default());
    }

    #[test]
    fn test_status_and_range() {
        let req: SubmissionsRequest = serde_json::from_str(
            r#"{"assignmentids": [5], "status": "submitted", "since": 10, "before": 20}"#,
        )
        .unwrap();
        let filter = req.validated().unwrap().filter();
        assert_eq!(filter.status.as_deref(), Some("submitted"));
        assert_eq!(filter.since, 10);
        assert_eq!(filter.before, Some(20));
    }

    #[test]
    fn test_non_alpha_status_is_rejected() {
        let req: SubmissionsRequest =
            serde_json::from_str(r#"{"assignmentids": [5], "status": "draft'--"}"#).unwrap();
        assert!(req.validated().is_err());
    }
}
