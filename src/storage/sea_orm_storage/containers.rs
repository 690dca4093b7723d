//! 作业到课程模块的解析

use super::SeaOrmStorage;
use crate::entity::course_modules::{Column, Entity as CourseModules, Relation};
use crate::entity::modules::{ASSIGN_MODULE, Column as ModuleColumn};
use crate::errors::{AssignError, Result};
use crate::models::assignments::entities::CourseModule;
use sea_orm::{ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};

impl SeaOrmStorage {
    /// 批量查询作业所在的课程模块
    pub async fn find_assignment_modules_impl(
        &self,
        assignment_ids: &[i64],
    ) -> Result<Vec<CourseModule>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let modules = CourseModules::find()
            .join(JoinType::InnerJoin, Relation::Module.def())
            .filter(ModuleColumn::Name.eq(ASSIGN_MODULE))
            .filter(Column::Instance.is_in(assignment_ids.iter().copied()))
            .order_by_asc(Column::Instance)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询课程模块失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_course_module()).collect())
    }
}
