//! 权限判定接口
//!
//! 服务层只通过 [`AuthorizationChecker`] 询问"能否在某上下文中使用某权限"，
//! 具体规则由存储层实现（见 `storage::sea_orm_storage::capabilities`）。

mod capability;

pub use capability::Capability;

use crate::errors::Result;
use crate::models::{assignments::entities::CourseModule, users::entities::Caller};
use async_trait::async_trait;

/// 拒绝原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// 上下文不可访问（未选课、课程或模块隐藏）
    ContextInaccessible,
    /// 缺少指定权限
    MissingCapability(Capability),
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::ContextInaccessible => write!(f, "context inaccessible"),
            DenyReason::MissingCapability(cap) => write!(f, "missing capability {cap}"),
        }
    }
}

/// 权限判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

#[async_trait]
pub trait AuthorizationChecker: Send + Sync {
    /// 在课程模块上下文中检查单个权限
    async fn check_module(
        &self,
        caller: &Caller,
        module: &CourseModule,
        capability: &Capability,
    ) -> Result<Decision>;

    /// 在课程上下文中检查权限，需全部具备；空列表只检查上下文可访问
    async fn check_course(
        &self,
        caller: &Caller,
        course_id: i64,
        capabilities: &[Capability],
    ) -> Result<Decision>;
}
