//! 批量查询的分组结果

/// 归属于某个父实体（作业）的子记录
pub trait ChildRecord {
    /// 所属父实体 ID
    fn parent_id(&self) -> i64;
}

/// 父实体 ID 及其有序子记录
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup<T> {
    pub parent_id: i64,
    pub children: Vec<T>,
}

impl<T> ResultGroup<T> {
    pub fn new(parent_id: i64) -> Self {
        Self {
            parent_id,
            children: Vec::new(),
        }
    }
}
