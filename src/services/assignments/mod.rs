pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceBackends;
use crate::models::assignments::requests::AssignmentsRequest;

pub struct AssignmentService {
    backends: ServiceBackends,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self {
            backends: ServiceBackends::default(),
        }
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        Self { backends }
    }

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        req: AssignmentsRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(&self.backends, request, req).await
    }
}
