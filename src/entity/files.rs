//! 文件元数据实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 所属课程模块 ID
    pub context_id: i64,
    pub component: String,
    pub file_area: String,
    pub item_id: i64,
    pub file_path: String,
    pub file_name: String,
    pub time_modified: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission_file(self) -> crate::models::submissions::entities::SubmissionFile {
        crate::models::submissions::entities::SubmissionFile {
            id: self.id,
            context_id: self.context_id,
            component: self.component,
            file_area: self.file_area,
            item_id: self.item_id,
            file_path: self.file_path,
            file_name: self.file_name,
            time_modified: self.time_modified,
        }
    }
}
