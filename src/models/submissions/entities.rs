use super::responses::SubmissionPlugin;
use crate::models::ChildRecord;

/// 提交记录（每个用户仅保留最高尝试次数的一条）
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub time_created: i64,
    pub time_modified: i64,
    pub status: Option<String>,
    pub group_id: i64,
    pub attempt_number: i64,
}

/// 提交查询条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFilter {
    /// 为空表示不按状态过滤
    pub status: Option<String>,
    pub since: i64,
    /// 设置时按 [since, before] 闭区间过滤，否则仅 timemodified >= since
    pub before: Option<i64>,
}

impl SubmissionFilter {
    pub fn matches(&self, record: &SubmissionRecord) -> bool {
        if let Some(status) = &self.status
            && record.status.as_deref() != Some(status.as_str())
        {
            return false;
        }
        match self.before {
            Some(before) => record.time_modified >= self.since && record.time_modified <= before,
            None => record.time_modified >= self.since,
        }
    }
}

/// 文件提交插件的组件名与文件区
pub const FILE_COMPONENT: &str = "assignsubmission_file";
pub const FILE_AREA: &str = "submission_files";

/// 提交区文件
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFile {
    pub id: i64,
    pub context_id: i64,
    pub component: String,
    pub file_area: String,
    pub item_id: i64,
    pub file_path: String,
    pub file_name: String,
    pub time_modified: i64,
}

impl SubmissionFile {
    /// 目录占位记录的文件名为 "."
    pub fn is_directory(&self) -> bool {
        self.file_name == "."
    }

    pub fn full_path(&self) -> String {
        format!("{}{}", self.file_path, self.file_name)
    }
}

/// 在线文本提交内容
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineText {
    pub submission_id: i64,
    pub text: Option<String>,
    pub format: i32,
}

/// 附带插件数据的完整提交
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub record: SubmissionRecord,
    pub plugins: Vec<SubmissionPlugin>,
}

impl ChildRecord for Submission {
    fn parent_id(&self) -> i64 {
        self.record.assignment_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str, time_modified: i64) -> SubmissionRecord {
        SubmissionRecord {
            id: 1,
            assignment_id: 5,
            user_id: 42,
            time_created: 0,
            time_modified,
            status: Some(status.to_string()),
            group_id: 0,
            attempt_number: 0,
        }
    }

    #[test]
    fn test_filter_without_before_is_open_ended() {
        let filter = SubmissionFilter {
            status: None,
            since: 100,
            before: None,
        };
        assert!(filter.matches(&record("draft", 100)));
        assert!(filter.matches(&record("draft", 99_999)));
        assert!(!filter.matches(&record("draft", 99)));
    }

    #[test]
    fn test_filter_with_before_is_inclusive_range() {
        let filter = SubmissionFilter {
            status: Some("submitted".to_string()),
            since: 10,
            before: Some(20),
        };
        assert!(filter.matches(&record("submitted", 10)));
        assert!(filter.matches(&record("submitted", 20)));
        assert!(!filter.matches(&record("submitted", 21)));
        assert!(!filter.matches(&record("draft", 15)));
    }

    #[test]
    fn test_file_paths() {
        let file = SubmissionFile {
            id: 1,
            context_id: 3,
            component: "assignsubmission_file".to_string(),
            file_area: "submission_files".to_string(),
            item_id: 8,
            file_path: "/docs/".to_string(),
            file_name: "essay.pdf".to_string(),
            time_modified: 0,
        };
        assert_eq!(file.full_path(), "/docs/essay.pdf");
        assert!(!file.is_directory());
    }
}
