//! 按权限过滤、批量查询、按作业分组、生成警告
//!
//! 评分、提交、用户标记与匿名映射四个接口共用这一流程，差异只在
//! 所需权限、批量查询方式和"无记录"提示上（见 [`BatchQuery`]）。

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::authorization::{AuthorizationChecker, Capability, Decision};
use crate::errors::Result;
use crate::models::{
    ChildRecord, ResultGroup, Warning, WarningItem, assignments::entities::CourseModule,
    users::entities::Caller,
};
use crate::storage::RecordStore;

pub const NO_MODULE_ACCESS_MESSAGE: &str = "No access rights in module context";

/// 一类子记录的批量查询
#[async_trait]
pub trait BatchQuery: Sync {
    type Record: ChildRecord + Send;

    /// 在课程模块上下文中需要的权限
    const CAPABILITY: Capability;
    /// 有权限但没有任何记录时的警告内容
    const NOT_FOUND_MESSAGE: &'static str;
    /// 未找到记录时警告的 item 字段，itemid 始终为作业 ID
    const NOT_FOUND_ITEM: WarningItem = WarningItem::Assignment;

    /// 查询已授权作业的记录，按 (作业 ID, 记录 ID) 升序
    async fn fetch(
        &self,
        store: &dyn RecordStore,
        modules: &[CourseModule],
    ) -> Result<Vec<Self::Record>>;
}

/// 分组结果与逐项警告
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    pub groups: Vec<ResultGroup<T>>,
    pub warnings: Vec<Warning>,
}

impl<T> Lookup<T> {
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

pub async fn lookup<Q: BatchQuery>(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    assignment_ids: &[i64],
    query: &Q,
) -> Result<Lookup<Q::Record>> {
    if assignment_ids.is_empty() {
        return Ok(Lookup::empty());
    }

    // 找不到课程模块的 ID 直接丢弃，不产生警告
    let modules = store.find_assignment_modules(assignment_ids).await?;
    let (allowed, mut warnings) =
        authorize_assignments(authorizer, caller, modules, &Q::CAPABILITY).await?;
    if allowed.is_empty() {
        return Ok(Lookup {
            groups: Vec::new(),
            warnings,
        });
    }

    let records = query.fetch(store, &allowed).await?;
    let groups = group_by_parent(records);

    let found: HashSet<i64> = groups.iter().map(|g| g.parent_id).collect();
    warnings.extend(
        allowed
            .iter()
            .filter(|module| !found.contains(&module.instance))
            .map(|module| {
                Warning::not_found(
                    Q::NOT_FOUND_ITEM,
                    module.instance,
                    Q::NOT_FOUND_MESSAGE,
                )
            }),
    );

    Ok(Lookup { groups, warnings })
}

/// 逐个检查课程模块权限，拒绝的记一条警告（itemid 为课程模块 ID）
pub async fn authorize_assignments(
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    modules: Vec<CourseModule>,
    capability: &Capability,
) -> Result<(Vec<CourseModule>, Vec<Warning>)> {
    let mut allowed = Vec::with_capacity(modules.len());
    let mut warnings = Vec::new();

    for module in modules {
        match authorizer.check_module(caller, &module, capability).await? {
            Decision::Allowed => allowed.push(module),
            Decision::Denied(reason) => {
                debug!(
                    "User {} denied on assignment {} (cm {}): {}",
                    caller.user_id, module.instance, module.id, reason
                );
                warnings.push(Warning::no_access(
                    WarningItem::Assignment,
                    module.id,
                    NO_MODULE_ACCESS_MESSAGE,
                ));
            }
        }
    }

    Ok((allowed, warnings))
}

/// 单次遍历按父 ID 分组，输入需已按父 ID 排序
pub fn group_by_parent<T: ChildRecord>(records: Vec<T>) -> Vec<ResultGroup<T>> {
    let mut groups: Vec<ResultGroup<T>> = Vec::new();
    for record in records {
        let parent_id = record.parent_id();
        match groups.last_mut() {
            Some(group) if group.parent_id == parent_id => group.children.push(record),
            _ => {
                let mut group = ResultGroup::new(parent_id);
                group.children.push(record);
                groups.push(group);
            }
        }
    }
    groups
}

/// 已授权作业的 ID 列表
pub fn assignment_ids(modules: &[CourseModule]) -> Vec<i64> {
    modules.iter().map(|m| m.instance).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WarningCode;
    use crate::models::user_mappings::entities::UserMapping;
    use crate::services::fakes::{FakeAuthorizer, FakeStore, caller, module};
    use crate::services::user_mappings::list::UserMappingsQuery;

    fn mapping(id: i64, assignment_id: i64) -> UserMapping {
        UserMapping {
            id,
            assignment_id,
            user_id: 100 + id,
        }
    }

    #[test]
    fn test_group_by_parent_single_pass() {
        let groups = group_by_parent(vec![mapping(1, 5), mapping(2, 5), mapping(3, 7)]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].parent_id, 5);
        assert_eq!(groups[0].children.len(), 2);
        assert_eq!(groups[1].parent_id, 7);
        assert_eq!(groups[1].children, vec![mapping(3, 7)]);
    }

    #[test]
    fn test_group_by_parent_empty() {
        assert!(group_by_parent::<UserMapping>(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn test_every_container_ends_in_exactly_one_place() {
        let store = FakeStore {
            modules: vec![module(50, 10, 5), module(60, 10, 6), module(70, 10, 7)],
            user_mappings: vec![mapping(1, 5), mapping(2, 5)],
            ..Default::default()
        };
        let authorizer = FakeAuthorizer::denying_modules(&[70]);

        // 8 没有课程模块
        let result = lookup(
            &store,
            &authorizer,
            &caller(42),
            &[5, 6, 7, 8],
            &UserMappingsQuery,
        )
        .await
        .unwrap();

        let grouped: Vec<i64> = result.groups.iter().map(|g| g.parent_id).collect();
        assert_eq!(grouped, vec![5]);

        let warned: Vec<(i64, WarningCode)> = result
            .warnings
            .iter()
            .map(|w| (w.itemid, w.warningcode))
            .collect();
        assert_eq!(
            warned,
            vec![(70, WarningCode::NoAccess), (6, WarningCode::NotFound)]
        );
        assert!(result.warnings.iter().all(|w| w.itemid != 8));
    }

    #[tokio::test]
    async fn test_all_denied_skips_batch_query() {
        let store = FakeStore {
            modules: vec![module(90, 10, 9)],
            user_mappings: vec![mapping(1, 9)],
            ..Default::default()
        };
        let authorizer = FakeAuthorizer::denying_modules(&[90]);

        let result = lookup(&store, &authorizer, &caller(42), &[9], &UserMappingsQuery)
            .await
            .unwrap();

        assert!(result.groups.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(store.calls(), vec!["find_assignment_modules"]);
    }

    #[tokio::test]
    async fn test_empty_request_touches_nothing() {
        let store = FakeStore::default();
        let result = lookup(
            &store,
            &FakeAuthorizer::default(),
            &caller(42),
            &[],
            &UserMappingsQuery,
        )
        .await
        .unwrap();

        assert_eq!(result, Lookup::empty());
        assert!(store.calls().is_empty());
    }
}
