use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use tracing::error;

use crate::authorization::{AuthorizationChecker, Capability};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::CourseModule;
use crate::models::user_mappings::{
    entities::UserMapping,
    requests::UserMappingsRequest,
    responses::{AssignmentUserMappings, UserMappingsResponse},
};
use crate::models::users::entities::Caller;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ServiceBackends;
use crate::services::lookup::{BatchQuery, assignment_ids, lookup};
use crate::storage::RecordStore;

pub struct UserMappingsQuery;

#[async_trait]
impl BatchQuery for UserMappingsQuery {
    type Record = UserMapping;

    // 映射会暴露匿名批阅下的真实身份
    const CAPABILITY: Capability = Capability::REVEAL_IDENTITIES;
    const NOT_FOUND_MESSAGE: &'static str = "No mappings found";

    async fn fetch(
        &self,
        store: &dyn RecordStore,
        modules: &[CourseModule],
    ) -> Result<Vec<UserMapping>> {
        store.list_user_mappings(&assignment_ids(modules)).await
    }
}

pub async fn collect_user_mappings(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    req: &UserMappingsRequest,
) -> Result<UserMappingsResponse> {
    let result = lookup(
        store,
        authorizer,
        caller,
        &req.assignmentids,
        &UserMappingsQuery,
    )
    .await?;

    Ok(UserMappingsResponse {
        assignments: result
            .groups
            .into_iter()
            .map(AssignmentUserMappings::from)
            .collect(),
        warnings: result.warnings,
    })
}

pub async fn list_user_mappings(
    backends: &ServiceBackends,
    request: &HttpRequest,
    req: UserMappingsRequest,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_caller(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    let req = match req.validated() {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    let storage = backends.get_storage(request)?;
    let authorizer = backends.get_authorizer(request)?;

    match collect_user_mappings(storage.as_ref(), authorizer.as_ref(), &caller, &req).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取匿名映射成功")))
        }
        Err(e) => {
            error!(
                "Failed to list user mappings for user {}: {}",
                caller.user_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取匿名映射失败: {e}"),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeAuthorizer, FakeStore, caller, module};

    #[tokio::test]
    async fn test_mappings_require_reveal_identities() {
        let store = FakeStore {
            modules: vec![module(50, 3, 5), module(60, 3, 6)],
            user_mappings: vec![
                UserMapping {
                    id: 11,
                    assignment_id: 5,
                    user_id: 42,
                },
                UserMapping {
                    id: 12,
                    assignment_id: 6,
                    user_id: 42,
                },
            ],
            ..Default::default()
        };
        let authorizer = FakeAuthorizer::denying_modules(&[60]);

        let response = collect_user_mappings(
            &store,
            &authorizer,
            &caller(1),
            &UserMappingsRequest {
                assignmentids: vec![5, 6],
            },
        )
        .await
        .unwrap();

        assert_eq!(response.assignments.len(), 1);
        assert_eq!(response.assignments[0].assignmentid, 5);
        assert_eq!(response.assignments[0].mappings[0].id, 11);
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.warnings[0].itemid, 60);
    }
}
