use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::{
    assignments::requests::AssignmentsRequest, grades::requests::GradesRequest,
    submissions::requests::SubmissionsRequest, user_flags::requests::UserFlagsRequest,
    user_mappings::requests::UserMappingsRequest,
};
use crate::services::{
    AssignmentService, GradeService, SubmissionService, UserFlagService, UserMappingService,
};

// 懒加载的全局服务实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);
static USER_FLAG_SERVICE: Lazy<UserFlagService> = Lazy::new(UserFlagService::new_lazy);
static USER_MAPPING_SERVICE: Lazy<UserMappingService> = Lazy::new(UserMappingService::new_lazy);

// 获取评分
pub async fn list_grades(
    req: HttpRequest,
    body: web::Json<GradesRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, body.into_inner()).await
}

// 获取课程下的作业
pub async fn list_assignments(
    req: HttpRequest,
    body: web::Json<AssignmentsRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, body.into_inner())
        .await
}

// 获取提交
pub async fn list_submissions(
    req: HttpRequest,
    body: web::Json<SubmissionsRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, body.into_inner())
        .await
}

// 获取用户标记
pub async fn list_user_flags(
    req: HttpRequest,
    body: web::Json<UserFlagsRequest>,
) -> ActixResult<HttpResponse> {
    USER_FLAG_SERVICE
        .list_user_flags(&req, body.into_inner())
        .await
}

// 获取匿名映射
pub async fn list_user_mappings(
    req: HttpRequest,
    body: web::Json<UserMappingsRequest>,
) -> ActixResult<HttpResponse> {
    USER_MAPPING_SERVICE
        .list_user_mappings(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_assign_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assign")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/grades").route(web::post().to(list_grades)))
            .service(web::resource("/assignments").route(web::post().to(list_assignments)))
            .service(web::resource("/submissions").route(web::post().to(list_submissions)))
            .service(web::resource("/user-flags").route(web::post().to(list_user_flags)))
            .service(web::resource("/user-mappings").route(web::post().to(list_user_mappings))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_missing_token_is_rejected() {
        let app = test::init_service(App::new().configure(configure_assign_routes)).await;

        for path in [
            "/api/v1/assign/grades",
            "/api/v1/assign/assignments",
            "/api/v1/assign/submissions",
            "/api/v1/assign/user-flags",
            "/api/v1/assign/user-mappings",
        ] {
            let req = test::TestRequest::post()
                .uri(path)
                .set_json(serde_json::json!({ "assignmentids": [1] }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
        }
    }
}
