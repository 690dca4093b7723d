//! 评分存储操作

use super::SeaOrmStorage;
use crate::entity::assign_grades::Entity as AssignGrades;
use crate::errors::{AssignError, Result};
use crate::models::grades::entities::Grade;
use crate::utils::placeholders;
use sea_orm::{EntityTrait, Statement, Value};

impl SeaOrmStorage {
    /// 每个 (作业, 用户) 取最高尝试次数的评分
    pub async fn list_latest_grades_impl(
        &self,
        assignment_ids: &[i64],
        since: i64,
    ) -> Result<Vec<Grade>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let backend = self.db.get_database_backend();
        let n = assignment_ids.len();
        let sql = format!(
            "SELECT g.id, g.assignment_id, g.user_id, g.time_created, g.time_modified, \
                    g.grader_id, g.grade, g.attempt_number \
             FROM assign_grades g \
             JOIN (SELECT assignment_id, user_id, MAX(attempt_number) AS max_attempt \
                   FROM assign_grades \
                   WHERE assignment_id IN ({inner}) \
                   GROUP BY assignment_id, user_id) latest \
               ON latest.assignment_id = g.assignment_id \
              AND latest.user_id = g.user_id \
              AND latest.max_attempt = g.attempt_number \
             WHERE g.time_modified >= {since} \
             ORDER BY g.assignment_id, g.id",
            inner = placeholders(backend, 1, n),
            since = placeholders(backend, n + 1, 1),
        );

        let mut values: Vec<Value> = Vec::with_capacity(n + 1);
        values.extend(assignment_ids.iter().map(|&id| Value::from(id)));
        values.push(since.into());

        let rows = AssignGrades::find()
            .from_raw_sql(Statement::from_sql_and_values(backend, sql, values))
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询评分失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }
}
