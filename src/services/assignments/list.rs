//! 按课程列出可见作业及其插件配置

use std::collections::{HashMap, HashSet};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use crate::authorization::{AuthorizationChecker, Capability, Decision, DenyReason};
use crate::errors::{AssignError, Result};
use crate::middlewares::RequireJWT;
use crate::models::assignments::{
    entities::{AssignmentModule, Course, PluginConfig},
    requests::AssignmentsRequest,
    responses::{AssignmentInfo, AssignmentsResponse, CourseAssignments},
};
use crate::models::users::entities::Caller;
use crate::models::{ApiResponse, ErrorCode, Warning, WarningItem};
use crate::services::ServiceBackends;
use crate::services::lookup::NO_MODULE_ACCESS_MESSAGE;
use crate::storage::RecordStore;

pub const NOT_ENROLLED_MESSAGE: &str =
    "User is not enrolled or does not have requested capability";
pub const NO_COURSE_ACCESS_MESSAGE: &str = "No access rights in course context";

pub async fn collect_assignments(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    req: &AssignmentsRequest,
) -> Result<AssignmentsResponse> {
    let capabilities = req
        .capabilities
        .iter()
        .map(|c| c.parse::<Capability>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(AssignError::validation)?;

    let mut enrolled = store.list_enrolled_courses(caller.user_id).await?;
    enrolled.sort_by_key(|c| (c.sortorder, c.id));

    let mut warnings = Vec::new();
    let enrolled_ids: HashSet<i64> = enrolled.iter().map(|c| c.id).collect();
    for &course_id in &req.courseids {
        if !enrolled_ids.contains(&course_id) {
            warnings.push(Warning::not_enrolled(
                WarningItem::Course,
                course_id,
                NOT_ENROLLED_MESSAGE,
            ));
        }
    }

    let requested: HashSet<i64> = req.courseids.iter().copied().collect();
    let mut courses = Vec::new();
    for course in enrolled {
        if !requested.is_empty() && !requested.contains(&course.id) {
            continue;
        }

        match authorizer
            .check_course(caller, course.id, &capabilities)
            .await?
        {
            Decision::Allowed => {}
            Decision::Denied(DenyReason::ContextInaccessible) => {
                warnings.push(Warning::no_access(
                    WarningItem::Course,
                    course.id,
                    NO_COURSE_ACCESS_MESSAGE,
                ));
                continue;
            }
            Decision::Denied(DenyReason::MissingCapability(capability)) => {
                debug!(
                    "Course {} skipped for user {}: missing {}",
                    course.id, caller.user_id, capability
                );
                continue;
            }
        }

        courses.push(collect_course(store, authorizer, caller, course, &mut warnings).await?);
    }

    Ok(AssignmentsResponse { courses, warnings })
}

async fn collect_course(
    store: &dyn RecordStore,
    authorizer: &dyn AuthorizationChecker,
    caller: &Caller,
    course: Course,
    warnings: &mut Vec<Warning>,
) -> Result<CourseAssignments> {
    let mut visible: Vec<AssignmentModule> = Vec::new();
    for module in store.list_course_assignments(course.id).await? {
        match authorizer
            .check_module(caller, &module.module, &Capability::VIEW)
            .await?
        {
            Decision::Allowed => visible.push(module),
            Decision::Denied(reason) => {
                debug!(
                    "Module {} hidden from user {}: {}",
                    module.module.id, caller.user_id, reason
                );
                warnings.push(Warning::no_access(
                    WarningItem::Module,
                    module.module.id,
                    NO_MODULE_ACCESS_MESSAGE,
                ));
            }
        }
    }

    let ids: Vec<i64> = visible.iter().map(|m| m.assignment.id).collect();
    let mut configs: HashMap<i64, Vec<PluginConfig>> = HashMap::new();
    for config in store.list_plugin_configs(&ids).await? {
        configs.entry(config.assignment_id).or_default().push(config);
    }

    let assignments = visible
        .into_iter()
        .map(|module| {
            let configs = configs.remove(&module.assignment.id).unwrap_or_default();
            AssignmentInfo::new(module, configs)
        })
        .collect();

    Ok(CourseAssignments::new(course, assignments))
}

pub async fn list_assignments(
    backends: &ServiceBackends,
    request: &HttpRequest,
    req: AssignmentsRequest,
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

    match collect_assignments(storage.as_ref(), authorizer.as_ref(), &caller, &req).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取作业列表成功"))),
        Err(AssignError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))),
        Err(e) => {
            error!("Failed to list assignments for user {}: {}", caller.user_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取作业列表失败: {e}"),
            )))
        }
    }
}
