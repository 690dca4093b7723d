pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceBackends;
use crate::models::grades::requests::GradesRequest;

pub struct GradeService {
    backends: ServiceBackends,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self {
            backends: ServiceBackends::default(),
        }
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        Self { backends }
    }

    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        req: GradesRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(&self.backends, request, req).await
    }
}
