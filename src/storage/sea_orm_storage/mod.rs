//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod capabilities;
mod containers;
mod courses;
mod grades;
mod submissions;
mod user_flags;
mod user_mappings;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{AssignError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AssignError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已有连接（测试或嵌入场景）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AssignError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AssignError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AssignError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AssignError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// RecordStore trait 实现
use crate::models::{
    assignments::entities::{AssignmentModule, Course, CourseModule, PluginConfig},
    grades::entities::Grade,
    submissions::entities::{OnlineText, SubmissionFile, SubmissionFilter, SubmissionRecord},
    user_flags::entities::UserFlag,
    user_mappings::entities::UserMapping,
    users::entities::User,
};
use crate::storage::RecordStore;
use async_trait::async_trait;

#[async_trait]
impl RecordStore for SeaOrmStorage {
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn find_assignment_modules(&self, assignment_ids: &[i64]) -> Result<Vec<CourseModule>> {
        self.find_assignment_modules_impl(assignment_ids).await
    }

    async fn list_latest_grades(&self, assignment_ids: &[i64], since: i64) -> Result<Vec<Grade>> {
        self.list_latest_grades_impl(assignment_ids, since).await
    }

    async fn list_latest_submissions(
        &self,
        assignment_ids: &[i64],
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionRecord>> {
        self.list_latest_submissions_impl(assignment_ids, filter)
            .await
    }

    async fn list_submission_files(
        &self,
        context_ids: &[i64],
        submission_ids: &[i64],
    ) -> Result<Vec<SubmissionFile>> {
        self.list_submission_files_impl(context_ids, submission_ids)
            .await
    }

    async fn list_online_texts(&self, submission_ids: &[i64]) -> Result<Vec<OnlineText>> {
        self.list_online_texts_impl(submission_ids).await
    }

    async fn list_user_flags(&self, assignment_ids: &[i64]) -> Result<Vec<UserFlag>> {
        self.list_user_flags_impl(assignment_ids).await
    }

    async fn list_user_mappings(&self, assignment_ids: &[i64]) -> Result<Vec<UserMapping>> {
        self.list_user_mappings_impl(assignment_ids).await
    }

    async fn list_enrolled_courses(&self, user_id: i64) -> Result<Vec<Course>> {
        self.list_enrolled_courses_impl(user_id).await
    }

    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<AssignmentModule>> {
        self.list_course_assignments_impl(course_id).await
    }

    async fn list_plugin_configs(&self, assignment_ids: &[i64]) -> Result<Vec<PluginConfig>> {
        self.list_plugin_configs_impl(assignment_ids).await
    }
}
