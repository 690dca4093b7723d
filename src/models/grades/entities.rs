use crate::models::ChildRecord;

/// 作业评分记录（每个用户仅保留最高尝试次数的一条）
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub time_created: i64,
    pub time_modified: i64,
    pub grader_id: i64,
    pub grade: Option<f64>,
    pub attempt_number: i64,
}

impl ChildRecord for Grade {
    fn parent_id(&self) -> i64 {
        self.assignment_id
    }
}
