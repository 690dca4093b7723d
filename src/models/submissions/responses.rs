use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;
use crate::models::{ResultGroup, Warning};

/// 文件区中的单个文件
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct FileInfo {
    pub filepath: String,
}

/// 插件的文件区
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct FileArea {
    pub area: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileInfo>,
}

/// 插件的富文本字段
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct EditorField {
    pub name: String,
    pub description: String,
    pub text: String,
    pub format: i32,
}

/// 单个提交插件的数据
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct SubmissionPlugin {
    #[serde(rename = "type")]
    pub plugin_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fileareas: Vec<FileArea>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub editorfields: Vec<EditorField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct SubmissionInfo {
    pub id: i64,
    pub userid: i64,
    pub timecreated: i64,
    pub timemodified: i64,
    pub status: String,
    pub groupid: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<SubmissionPlugin>,
}

impl From<Submission> for SubmissionInfo {
    fn from(submission: Submission) -> Self {
        let record = submission.record;
        Self {
            id: record.id,
            userid: record.user_id,
            timecreated: record.time_created,
            timemodified: record.time_modified,
            status: record.status.unwrap_or_default(),
            groupid: record.group_id,
            plugins: submission.plugins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentSubmissions {
    pub assignmentid: i64,
    pub submissions: Vec<SubmissionInfo>,
}

impl From<ResultGroup<Submission>> for AssignmentSubmissions {
    fn from(group: ResultGroup<Submission>) -> Self {
        Self {
            assignmentid: group.parent_id,
            submissions: group
                .children
                .into_iter()
                .map(SubmissionInfo::from)
                .collect(),
        }
    }
}

/// 提交查询响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct SubmissionsResponse {
    pub assignments: Vec<AssignmentSubmissions>,
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections_omitted() {
        let plugin = SubmissionPlugin {
            plugin_type: "file".to_string(),
            name: "File submissions".to_string(),
            fileareas: vec![FileArea {
                area: "submission_files".to_string(),
                files: Vec::new(),
            }],
            editorfields: Vec::new(),
        };
        let json = serde_json::to_value(&plugin).unwrap();
        assert_eq!(json["type"], "file");
        assert!(json.get("editorfields").is_none());
        assert!(json["fileareas"][0].get("files").is_none());

        let info = SubmissionInfo {
            id: 1,
            userid: 42,
            timecreated: 10,
            timemodified: 20,
            status: "new".to_string(),
            groupid: 0,
            plugins: Vec::new(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("plugins").is_none());
        assert_eq!(json["status"], "new");
    }
}
