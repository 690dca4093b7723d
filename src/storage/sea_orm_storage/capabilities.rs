//! 基于选课与权限授予表的权限判定

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::debug;

use super::SeaOrmStorage;
use crate::authorization::{AuthorizationChecker, Capability, Decision, DenyReason};
use crate::entity::capability_grants::{
    Column as GrantColumn, Entity as CapabilityGrants, LEVEL_COURSE, LEVEL_MODULE, LEVEL_SYSTEM,
};
use crate::entity::courses::Entity as Courses;
use crate::entity::enrolments::{Column as EnrolmentColumn, Entity as Enrolments, STATUS_ACTIVE};
use crate::errors::{AssignError, Result};
use crate::models::{assignments::entities::CourseModule, users::entities::Caller};

impl SeaOrmStorage {
    /// 用户在系统、课程或模块级别被授予了该权限
    async fn has_capability(
        &self,
        user_id: i64,
        capability: &Capability,
        course_id: i64,
        module_id: Option<i64>,
    ) -> Result<bool> {
        let mut scope = Condition::any()
            .add(GrantColumn::ContextLevel.eq(LEVEL_SYSTEM))
            .add(
                Condition::all()
                    .add(GrantColumn::ContextLevel.eq(LEVEL_COURSE))
                    .add(GrantColumn::InstanceId.eq(course_id)),
            );
        if let Some(module_id) = module_id {
            scope = scope.add(
                Condition::all()
                    .add(GrantColumn::ContextLevel.eq(LEVEL_MODULE))
                    .add(GrantColumn::InstanceId.eq(module_id)),
            );
        }

        let count = CapabilityGrants::find()
            .filter(GrantColumn::UserId.eq(user_id))
            .filter(GrantColumn::Capability.eq(capability.as_str()))
            .filter(scope)
            .count(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询权限授予失败: {e}")))?;

        Ok(count > 0)
    }

    /// 课程上下文是否可访问：课程存在、有效选课、课程可见或可查看隐藏课程
    async fn course_accessible(&self, user_id: i64, course_id: i64) -> Result<bool> {
        let Some(course) = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(false);
        };

        let enrolled = Enrolments::find()
            .filter(EnrolmentColumn::CourseId.eq(course_id))
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .filter(EnrolmentColumn::Status.eq(STATUS_ACTIVE))
            .count(&self.db)
            .await
            .map_err(|e| AssignError::database_operation(format!("查询选课失败: {e}")))?
            > 0;
        if !enrolled {
            return Ok(false);
        }

        if course.visible {
            return Ok(true);
        }
        self.has_capability(user_id, &Capability::VIEW_HIDDEN_COURSES, course_id, None)
            .await
    }
}

#[async_trait]
impl AuthorizationChecker for SeaOrmStorage {
    async fn check_module(
        &self,
        caller: &Caller,
        module: &CourseModule,
        capability: &Capability,
    ) -> Result<Decision> {
        if caller.is_site_admin {
            return Ok(Decision::Allowed);
        }

        if !self.course_accessible(caller.user_id, module.course_id).await? {
            return Ok(Decision::Denied(DenyReason::ContextInaccessible));
        }

        if !module.visible
            && !self
                .has_capability(
                    caller.user_id,
                    &Capability::VIEW_HIDDEN_ACTIVITIES,
                    module.course_id,
                    Some(module.id),
                )
                .await?
        {
            debug!("Module {} is hidden from user {}", module.id, caller.user_id);
            return Ok(Decision::Denied(DenyReason::ContextInaccessible));
        }

        if !self
            .has_capability(caller.user_id, capability, module.course_id, Some(module.id))
            .await?
        {
            return Ok(Decision::Denied(DenyReason::MissingCapability(
                capability.clone(),
            )));
        }

        Ok(Decision::Allowed)
    }

    async fn check_course(
        &self,
        caller: &Caller,
        course_id: i64,
        capabilities: &[Capability],
    ) -> Result<Decision> {
        if caller.is_site_admin {
            return Ok(Decision::Allowed);
        }

        if !self.course_accessible(caller.user_id, course_id).await? {
            return Ok(Decision::Denied(DenyReason::ContextInaccessible));
        }

        for capability in capabilities {
            if !self
                .has_capability(caller.user_id, capability, course_id, None)
                .await?
            {
                return Ok(Decision::Denied(DenyReason::MissingCapability(
                    capability.clone(),
                )));
            }
        }

        Ok(Decision::Allowed)
    }
}
