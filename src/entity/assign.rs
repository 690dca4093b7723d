//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assign")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub no_submissions: i32,
    pub submission_drafts: i32,
    pub send_notifications: i32,
    pub send_late_notifications: i32,
    pub due_date: i64,
    pub allow_submissions_from_date: i64,
    pub grade: i64,
    pub time_modified: i64,
    pub completion_submit: i32,
    pub cutoff_date: i64,
    pub team_submission: i32,
    pub require_all_team_members_submit: i32,
    pub team_submission_grouping_id: i64,
    pub blind_marking: i32,
    pub reveal_identities: i32,
    pub attempt_reopen_method: String,
    pub max_attempts: i32,
    pub marking_workflow: i32,
    pub marking_allocation: i32,
    pub require_submission_statement: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assign_plugin_config::Entity")]
    PluginConfigs,
}

impl Related<super::assign_plugin_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PluginConfigs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        crate::models::assignments::entities::Assignment {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            no_submissions: self.no_submissions,
            submission_drafts: self.submission_drafts,
            send_notifications: self.send_notifications,
            send_late_notifications: self.send_late_notifications,
            due_date: self.due_date,
            allow_submissions_from_date: self.allow_submissions_from_date,
            grade: self.grade,
            time_modified: self.time_modified,
            completion_submit: self.completion_submit,
            cutoff_date: self.cutoff_date,
            team_submission: self.team_submission,
            require_all_team_members_submit: self.require_all_team_members_submit,
            team_submission_grouping_id: self.team_submission_grouping_id,
            blind_marking: self.blind_marking,
            reveal_identities: self.reveal_identities,
            attempt_reopen_method: self.attempt_reopen_method,
            max_attempts: self.max_attempts,
            marking_workflow: self.marking_workflow,
            marking_allocation: self.marking_allocation,
            require_submission_statement: self.require_submission_statement,
        }
    }
}
