//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::assign_submission::Entity as AssignSubmission;
use crate::entity::assignsubmission_onlinetext::{
    Column as OnlineTextColumn, Entity as AssignsubmissionOnlinetext,
};
use crate::entity::files::{Column as FileColumn, Entity as Files};
use crate::errors::{AssignError, Result};
use crate::models::submissions::entities::{
    FILE_AREA, FILE_COMPONENT, OnlineText, SubmissionFile, SubmissionFilter, SubmissionRecord,
};
use crate::utils::placeholders;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Statement, Value};

impl SeaOrmStorage {
    /// 每个 (作业, 用户) 取最高尝试次数的提交，再按状态与时间过滤
    pub async fn list_latest_submissions_impl(
        &self,
        assignment_ids: &[i64],
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionRecord>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let backend = self.db.get_database_backend();
        let n = assignment_ids.len();

        // 作业 ID 只在子查询中绑定一次，连接条件已限定外层行
        let mut values: Vec<Value> = Vec::with_capacity(n + 3);
        values.extend(assignment_ids.iter().map(|&id| Value::from(id)));
        let inner = placeholders(backend, 1, n);

        let mut conditions = Vec::with_capacity(2);
        if let Some(status) = &filter.status {
            values.push(status.clone().into());
            conditions.push(format!("s.status = {}", placeholders(backend, values.len(), 1)));
        }
        values.push(filter.since.into());
        let since = placeholders(backend, values.len(), 1);
        match filter.before {
            Some(before) => {
                values.push(before.into());
                let before = placeholders(backend, values.len(), 1);
                conditions.push(format!("s.time_modified BETWEEN {since} AND {before}"));
            }
            None => conditions.push(format!("s.time_modified >= {since}")),
        }

        let sql = format!(
            "SELECT s.id, s.assignment_id, s.user_id, s.time_created, s.time_modified, \
                    s.status, s.group_id, s.attempt_number \
             FROM assign_submission s \
             JOIN (SELECT assignment_id, user_id, MAX(attempt_number) AS max_attempt \
                   FROM assign_submission \
                   WHERE assignment_id IN ({inner}) \
                   GROUP BY assignment_id, user_id) latest \
               ON latest.assignment_id = s.assignment_id \
              AND latest.user_id = s.user_id \
              AND latest.max_attempt = s.attempt_number \
             WHERE {} \
             ORDER BY s.assignment_id, s.id",
            conditions.join(" AND "),
        );

        let rows = AssignSubmission::find()
            .from_raw_sql(Statement::from_sql_and_values(backend, sql, values))
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission_record()).collect())
    }

    /// 批量查询提交区文件
    pub async fn list_submission_files_impl(
        &self,
        context_ids: &[i64],
        submission_ids: &[i64],
    ) -> Result<Vec<SubmissionFile>> {
        if context_ids.is_empty() || submission_ids.is_empty() {
            return Ok(Vec::new());
        }

        let files = Files::find()
            .filter(FileColumn::Component.eq(FILE_COMPONENT))
            .filter(FileColumn::FileArea.eq(FILE_AREA))
            .filter(FileColumn::ContextId.is_in(context_ids.iter().copied()))
            .filter(FileColumn::ItemId.is_in(submission_ids.iter().copied()))
            .order_by_asc(FileColumn::TimeModified)
            .order_by_asc(FileColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询提交文件失败: {e}")))?;

        Ok(files.into_iter().map(|m| m.into_submission_file()).collect())
    }

    /// 批量查询在线文本
    pub async fn list_online_texts_impl(&self, submission_ids: &[i64]) -> Result<Vec<OnlineText>> {
        if submission_ids.is_empty() {
            return Ok(Vec::new());
        }

        let texts = AssignsubmissionOnlinetext::find()
            .filter(OnlineTextColumn::SubmissionId.is_in(submission_ids.iter().copied()))
            .order_by_asc(OnlineTextColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询在线文本失败: {e}")))?;

        Ok(texts.into_iter().map(|m| m.into_online_text()).collect())
    }
}
