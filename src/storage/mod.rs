use std::sync::Arc;

use crate::authorization::AuthorizationChecker;
use crate::errors::Result;
use crate::models::{
    assignments::entities::{AssignmentModule, Course, CourseModule, PluginConfig},
    grades::entities::Grade,
    submissions::entities::{OnlineText, SubmissionFile, SubmissionFilter, SubmissionRecord},
    user_flags::entities::UserFlag,
    user_mappings::entities::UserMapping,
    users::entities::User,
};

pub mod sea_orm_storage;

/// 只读记录存储
///
/// 所有批量方法都按 (作业 ID, 记录 ID) 升序返回。
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 作业 ID 对应的课程模块，按作业 ID 升序；不存在的 ID 不返回
    async fn find_assignment_modules(&self, assignment_ids: &[i64]) -> Result<Vec<CourseModule>>;

    /// 评分模块
    // 每个 (作业, 用户) 最高尝试次数的评分，timemodified >= since
    async fn list_latest_grades(&self, assignment_ids: &[i64], since: i64) -> Result<Vec<Grade>>;

    /// 提交模块
    // 每个 (作业, 用户) 最高尝试次数的提交，再按条件过滤
    async fn list_latest_submissions(
        &self,
        assignment_ids: &[i64],
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionRecord>>;
    // 提交区文件，按 timemodified、id 升序
    async fn list_submission_files(
        &self,
        context_ids: &[i64],
        submission_ids: &[i64],
    ) -> Result<Vec<SubmissionFile>>;
    // 在线文本
    async fn list_online_texts(&self, submission_ids: &[i64]) -> Result<Vec<OnlineText>>;

    /// 用户标记与匿名映射
    async fn list_user_flags(&self, assignment_ids: &[i64]) -> Result<Vec<UserFlag>>;
    async fn list_user_mappings(&self, assignment_ids: &[i64]) -> Result<Vec<UserMapping>>;

    /// 课程与作业设置
    // 用户有效选课的课程，按 sortorder、id 升序
    async fn list_enrolled_courses(&self, user_id: i64) -> Result<Vec<Course>>;
    // 课程下的作业模块，按课程模块 ID 升序
    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<AssignmentModule>>;
    async fn list_plugin_configs(&self, assignment_ids: &[i64]) -> Result<Vec<PluginConfig>>;
}

/// 同一个数据库连接同时作为记录存储和权限判定
pub struct Backends {
    pub store: Arc<dyn RecordStore>,
    pub authorizer: Arc<dyn AuthorizationChecker>,
}

pub async fn create_storage() -> Result<Backends> {
    let storage = Arc::new(sea_orm_storage::SeaOrmStorage::new_async().await?);
    Ok(Backends {
        store: storage.clone(),
        authorizer: storage,
    })
}
