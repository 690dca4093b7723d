//! 用户标记实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_user_flags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub locked: i32,
    pub mailed: i32,
    pub extension_due_date: i64,
    pub workflow_state: Option<String>,
    pub allocated_marker: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assign::Entity",
        from = "Column::AssignmentId",
        to = "super::assign::Column::Id"
    )]
    Assignment,
}

impl Related<super::assign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_user_flag(self) -> crate::models::user_flags::entities::UserFlag {
        crate::models::user_flags::entities::UserFlag {
            id: self.id,
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            locked: self.locked,
            mailed: self.mailed,
            extension_due_date: self.extension_due_date,
            workflow_state: self.workflow_state,
            allocated_marker: self.allocated_marker,
        }
    }
}
