use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use tracing::error;

use super::plugins::PluginPayloads;
use crate::authorization::{AuthorizationChecker, Capability};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::CourseModule;
use crate::models::submissions::{
    entities::{Submission, SubmissionFilter},
    requests::SubmissionsRequest,
    responses::{AssignmentSubmissions, SubmissionsResponse},
};
use crate::models::users::entities::Caller;
use crate::models::{ApiResponse, ErrorCode, WarningItem};
use crate::services::ServiceBackends;
use crate::services::lookup::{BatchQuery, assignment_ids, lookup};
use crate::storage::RecordStore;

/// 每个用户最新一次尝试的提交及其插件数据
pub struct SubmissionsQuery {
    pub filter: SubmissionFilter,
}

#[async_trait]
impl BatchQuery for SubmissionsQuery {
    type Record = Submission;

    const CAPABILITY: Capability = Capability::GRADE;
    const NOT_FOUND_MESSAGE: &'static str = "No submissions found";
    const NOT_FOUND_ITEM: WarningItem = WarningItem::Module;

    async fn fetch(
        &self,
        store: &dyn RecordStore,
        modules: &[CourseModule],
    ) -> Result<Vec<Submission>> {
        let records = store
            .list_latest_submissions(&assignment_ids(modules), &self.filter)
            .await?;
        let payloads = PluginPayloads::load(store, &records, modules).await?;

        Ok(records
            .into_iter()
            .map(|record| Submission {
                plugins: payloads.plugins_for(&record),
                record,
            })
            .collect())
    }
}

pub async fn collect_submissions(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    req: &SubmissionsRequest,
) -> Result<SubmissionsResponse> {
    let query = SubmissionsQuery {
        filter: req.filter(),
    };
    let result = lookup(store, authorizer, caller, &req.assignmentids, &query).await?;

    Ok(SubmissionsResponse {
        assignments: result
            .groups
            .into_iter()
            .map(AssignmentSubmissions::from)
            .collect(),
        warnings: result.warnings,
    })
}

pub async fn list_submissions(
    backends: &ServiceBackends,
    request: &HttpRequest,
    req: SubmissionsRequest,
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

    match collect_submissions(storage.as_ref(), authorizer.as_ref(), &caller, &req).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取提交成功"))),
        Err(e) => {
            error!("Failed to list submissions for user {}: {}", caller.user_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交失败: {e}"),
            )))
        }
    }
}
