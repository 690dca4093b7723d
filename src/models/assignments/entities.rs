/// 课程
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub fullname: String,
    pub shortname: String,
    pub sortorder: i64,
    pub visible: bool,
    pub time_modified: i64,
}

/// 课程模块：作业在课程中的实例，也是权限检查的作用域
#[derive(Debug, Clone, PartialEq)]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    /// 对应的作业 ID
    pub instance: i64,
    pub visible: bool,
}

/// 作业设置
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
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

/// 课程模块及其作业
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentModule {
    pub module: CourseModule,
    pub assignment: Assignment,
}

/// 作业插件配置项
#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    pub id: i64,
    pub assignment_id: i64,
    pub plugin: String,
    pub subtype: String,
    pub name: String,
    pub value: Option<String>,
}
