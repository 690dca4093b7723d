pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceBackends;
use crate::models::user_mappings::requests::UserMappingsRequest;

pub struct UserMappingService {
    backends: ServiceBackends,
}

impl UserMappingService {
    pub fn new_lazy() -> Self {
        Self {
            backends: ServiceBackends::default(),
        }
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        Self { backends }
    }

    pub async fn list_user_mappings(
        &self,
        request: &HttpRequest,
        req: UserMappingsRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_user_mappings(&self.backends, request, req).await
    }
}
