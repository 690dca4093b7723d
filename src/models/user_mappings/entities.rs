use crate::models::ChildRecord;

/// 匿名批阅映射：映射记录 ID 即对外展示的匿名参与者编号
#[derive(Debug, Clone, PartialEq)]
pub struct UserMapping {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
}

impl ChildRecord for UserMapping {
    fn parent_id(&self) -> i64 {
        self.assignment_id
    }
}
