use crate::models::ChildRecord;

/// 学生在某作业上的标记（锁定、延期、批阅流程状态、分配的批阅人）
#[derive(Debug, Clone, PartialEq)]
pub struct UserFlag {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub locked: i32,
    pub mailed: i32,
    pub extension_due_date: i64,
    pub workflow_state: Option<String>,
    pub allocated_marker: i64,
}

impl ChildRecord for UserFlag {
    fn parent_id(&self) -> i64 {
        self.assignment_id
    }
}
