use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use tracing::error;

use crate::authorization::{AuthorizationChecker, Capability};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::CourseModule;
use crate::models::grades::{
    entities::Grade,
    requests::GradesRequest,
    responses::{AssignmentGrades, GradesResponse},
};
use crate::models::users::entities::Caller;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ServiceBackends;
use crate::services::lookup::{BatchQuery, assignment_ids, lookup};
use crate::storage::RecordStore;

/// 每个用户最新一次尝试的评分
pub struct GradesQuery {
    pub since: i64,
}

#[async_trait]
impl BatchQuery for GradesQuery {
    type Record = Grade;

    const CAPABILITY: Capability = Capability::GRADE;
    const NOT_FOUND_MESSAGE: &'static str = "No grades found";

    async fn fetch(&self, store: &dyn RecordStore, modules: &[CourseModule]) -> Result<Vec<Grade>> {
        store
            .list_latest_grades(&assignment_ids(modules), self.since)
            .await
    }
}

pub async fn collect_grades(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    req: &GradesRequest,
) -> Result<GradesResponse> {
    let query = GradesQuery { since: req.since };
    let result = lookup(store, authorizer, caller, &req.assignmentids, &query).await?;

    Ok(GradesResponse {
        assignments: result
            .groups
            .into_iter()
            .map(AssignmentGrades::from)
            .collect(),
        warnings: result.warnings,
    })
}

pub async fn list_grades(
    backends: &ServiceBackends,
    request: &HttpRequest,
    req: GradesRequest,
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

    match collect_grades(storage.as_ref(), authorizer.as_ref(), &caller, &req).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取评分成功"))),
        Err(e) => {
            error!("Failed to list grades for user {}: {}", caller.user_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取评分失败: {e}"),
            )))
        }
    }
}
