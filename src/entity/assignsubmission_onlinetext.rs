//! 在线文本提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignsubmission_onlinetext")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub submission_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub online_text: Option<String>,
    pub online_format: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assign_submission::Entity",
        from = "Column::SubmissionId",
        to = "super::assign_submission::Column::Id"
    )]
    Submission,
}

impl Related<super::assign_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_online_text(self) -> crate::models::submissions::entities::OnlineText {
        crate::models::submissions::entities::OnlineText {
            submission_id: self.submission_id,
            text: self.online_text,
            format: self.online_format,
        }
    }
}
