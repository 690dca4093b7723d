//! 用户标记存储操作

use super::SeaOrmStorage;
use crate::entity::assign_user_flags::{Column, Entity as AssignUserFlags};
use crate::errors::{AssignError, Result};
use crate::models::user_flags::entities::UserFlag;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    pub async fn list_user_flags_impl(&self, assignment_ids: &[i64]) -> Result<Vec<UserFlag>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let flags = AssignUserFlags::find()
            .filter(Column::AssignmentId.is_in(assignment_ids.iter().copied()))
            .order_by_asc(Column::AssignmentId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询用户标记失败: {e}")))?;

        Ok(flags.into_iter().map(|m| m.into_user_flag()).collect())
    }
}
