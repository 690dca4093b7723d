//! 课程与作业设置存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assign::{Column as AssignColumn, Entity as Assign};
use crate::entity::assign_plugin_config::{Column as ConfigColumn, Entity as AssignPluginConfig};
use crate::entity::course_modules::{
    Column as CourseModuleColumn, Entity as CourseModules, Relation as CourseModuleRelation,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses, Relation as CourseRelation};
use crate::entity::enrolments::{Column as EnrolmentColumn, STATUS_ACTIVE};
use crate::entity::modules::{ASSIGN_MODULE, Column as ModuleColumn};
use crate::errors::{AssignError, Result};
use crate::models::assignments::entities::{AssignmentModule, Course, PluginConfig};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 用户有效选课的课程
    pub async fn list_enrolled_courses_impl(&self, user_id: i64) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .join(JoinType::InnerJoin, CourseRelation::Enrolments.def())
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .filter(EnrolmentColumn::Status.eq(STATUS_ACTIVE))
            .distinct()
            .order_by_asc(CourseColumn::Sortorder)
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询选课课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 课程下的全部作业模块
    pub async fn list_course_assignments_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<AssignmentModule>> {
        let modules = CourseModules::find()
            .join(JoinType::InnerJoin, CourseModuleRelation::Module.def())
            .filter(ModuleColumn::Name.eq(ASSIGN_MODULE))
            .filter(CourseModuleColumn::CourseId.eq(course_id))
            .order_by_asc(CourseModuleColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询课程模块失败: {e}")))?;

        if modules.is_empty() {
            return Ok(Vec::new());
        }

        let mut assignments: HashMap<i64, _> = Assign::find()
            .filter(AssignColumn::Id.is_in(modules.iter().map(|m| m.instance)))
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询作业失败: {e}")))?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let mut result = Vec::with_capacity(modules.len());
        for module in modules {
            match assignments.remove(&module.instance) {
                Some(assignment) => result.push(AssignmentModule {
                    module: module.into_course_module(),
                    assignment: assignment.into_assignment(),
                }),
                None => warn!(
                    "Course module {} points to missing assignment {}",
                    module.id, module.instance
                ),
            }
        }

        Ok(result)
    }

    /// 批量查询插件配置
    pub async fn list_plugin_configs_impl(
        &self,
        assignment_ids: &[i64],
    ) -> Result<Vec<PluginConfig>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let configs = AssignPluginConfig::find()
            .filter(ConfigColumn::AssignmentId.is_in(assignment_ids.iter().copied()))
            .order_by_asc(ConfigColumn::AssignmentId)
            .order_by_asc(ConfigColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询插件配置失败: {e}")))?;

        Ok(configs.into_iter().map(|m| m.into_plugin_config()).collect())
    }
}
