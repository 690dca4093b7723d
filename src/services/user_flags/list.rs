use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use tracing::error;

use crate::authorization::{AuthorizationChecker, Capability};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::CourseModule;
use crate::models::user_flags::{
    entities::UserFlag,
    requests::UserFlagsRequest,
    responses::{AssignmentUserFlags, UserFlagsResponse},
};
use crate::models::users::entities::Caller;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ServiceBackends;
use crate::services::lookup::{BatchQuery, assignment_ids, lookup};
use crate::storage::RecordStore;

pub struct UserFlagsQuery;

#[async_trait]
impl BatchQuery for UserFlagsQuery {
    type Record = UserFlag;

    const CAPABILITY: Capability = Capability::GRADE;
    const NOT_FOUND_MESSAGE: &'static str = "No user flags found";

    async fn fetch(
        &self,
        store: &dyn RecordStore,
        modules: &[CourseModule],
    ) -> Result<Vec<UserFlag>> {
        store.list_user_flags(&assignment_ids(modules)).await
    }
}

pub async fn collect_user_flags(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    req: &UserFlagsRequest,
) -> Result<UserFlagsResponse> {
    let result = lookup(store, authorizer, caller, &req.assignmentids, &UserFlagsQuery).await?;

    Ok(UserFlagsResponse {
        assignments: result
            .groups
            .into_iter()
            .map(AssignmentUserFlags::from)
            .collect(),
        warnings: result.warnings,
    })
}

pub async fn list_user_flags(
    backends: &ServiceBackends,
    request: &HttpRequest,
    req: UserFlagsRequest,
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

    match collect_user_flags(storage.as_ref(), authorizer.as_ref(), &caller, &req).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取用户标记成功")))
        }
        Err(e) => {
            error!("Failed to list user flags for user {}: {}", caller.user_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取用户标记失败: {e}"),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeAuthorizer, FakeStore, caller, module};

    fn flag(id: i64, assignment_id: i64, workflow_state: Option<&str>) -> UserFlag {
        UserFlag {
            id,
            assignment_id,
            user_id: 40 + id,
            locked: 0,
            mailed: 1,
            extension_due_date: 0,
            workflow_state: workflow_state.map(str::to_string),
            allocated_marker: 7,
        }
    }

    #[tokio::test]
    async fn test_flags_grouped_by_assignment() {
        let store = FakeStore {
            modules: vec![module(50, 3, 5), module(60, 3, 6), module(70, 3, 7)],
            user_flags: vec![
                flag(4, 6, None),
                flag(1, 5, Some("inmarking")),
                flag(3, 5, None),
            ],
            ..Default::default()
        };

        let response = collect_user_flags(
            &store,
            &FakeAuthorizer::default(),
            &caller(1),
            &UserFlagsRequest {
                assignmentids: vec![7, 6, 5],
            },
        )
        .await
        .unwrap();

        let shape: Vec<(i64, Vec<i64>)> = response
            .assignments
            .iter()
            .map(|a| (a.assignmentid, a.userflags.iter().map(|f| f.id).collect()))
            .collect();
        assert_eq!(shape, vec![(5, vec![1, 3]), (6, vec![4])]);
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.warnings[0].itemid, 7);
        assert_eq!(response.warnings[0].message, "No user flags found");
    }

    #[tokio::test]
    async fn test_workflow_state_omitted_when_unset() {
        let store = FakeStore {
            modules: vec![module(50, 3, 5)],
            user_flags: vec![flag(1, 5, None)],
            ..Default::default()
        };

        let response = collect_user_flags(
            &store,
            &FakeAuthorizer::default(),
            &caller(1),
            &UserFlagsRequest {
                assignmentids: vec![5],
            },
        )
        .await
        .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        let flag = &json["assignments"][0]["userflags"][0];
        assert!(flag.get("workflowstate").is_none());
        assert_eq!(flag["allocatedmarker"], 7);
    }
}
