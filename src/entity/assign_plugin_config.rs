//! 作业插件配置实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_plugin_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub plugin: String,
    pub subtype: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub value: Option<String>,
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
    pub fn into_plugin_config(self) -> crate::models::assignments::entities::PluginConfig {
        crate::models::assignments::entities::PluginConfig {
            id: self.id,
            assignment_id: self.assignment_id,
            plugin: self.plugin,
            subtype: self.subtype,
            name: self.name,
            value: self.value,
        }
    }
}
