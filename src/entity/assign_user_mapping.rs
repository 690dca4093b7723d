//! 匿名映射实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_user_mapping")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
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
    pub fn into_user_mapping(self) -> crate::models::user_mappings::entities::UserMapping {
        crate::models::user_mappings::entities::UserMapping {
            id: self.id,
            assignment_id: self.assignment_id,
            user_id: self.user_id,
        }
    }
}
