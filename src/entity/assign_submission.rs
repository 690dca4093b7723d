//! 作业提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub time_created: i64,
    pub time_modified: i64,
    pub status: Option<String>,
    pub group_id: i64,
    pub attempt_number: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assign::Entity",
        from = "Column::AssignmentId",
        to = "super::assign::Column::Id"
    )]
    Assignment,
    #[sea_orm(has_many = "super::assignsubmission_onlinetext::Entity")]
    OnlineText,
}

impl Related<super::assign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::assignsubmission_onlinetext::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnlineText.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission_record(self) -> crate::models::submissions::entities::SubmissionRecord {
        crate::models::submissions::entities::SubmissionRecord {
            id: self.id,
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            time_created: self.time_created,
            time_modified: self.time_modified,
            status: self.status,
            group_id: self.group_id,
            attempt_number: self.attempt_number,
        }
    }
}
