pub mod list;
pub mod plugins;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceBackends;
use crate::models::submissions::requests::SubmissionsRequest;

pub struct SubmissionService {
    backends: ServiceBackends,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self {
            backends: ServiceBackends::default(),
        }
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        Self { backends }
    }

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        req: SubmissionsRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(&self.backends, request, req).await
    }
}
