//! 作业评分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub time_created: i64,
    pub time_modified: i64,
    pub grader_id: i64,
    #[sea_orm(column_type = "Double", nullable)]
    pub grade: Option<f64>,
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
}

impl Related<super::assign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        crate::models::grades::entities::Grade {
            id: self.id,
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            time_created: self.time_created,
            time_modified: self.time_modified,
            grader_id: self.grader_id,
            grade: self.grade,
            attempt_number: self.attempt_number,
        }
    }
}
