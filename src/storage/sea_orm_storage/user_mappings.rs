//! 匿名映射存储操作

use super::SeaOrmStorage;
use crate::entity::assign_user_mapping::{Column, Entity as AssignUserMapping};
use crate::errors::{AssignError, Result};
use crate::models::user_mappings::entities::UserMapping;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    pub async fn list_user_mappings_impl(
        &self,
        assignment_ids: &[i64],
    ) -> Result<Vec<UserMapping>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mappings = AssignUserMapping::find()
            .filter(Column::AssignmentId.is_in(assignment_ids.iter().copied()))
            .order_by_asc(Column::AssignmentId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询匿名映射失败: {e}")))?;

        Ok(mappings.into_iter().map(|m| m.into_user_mapping()).collect())
    }
}
