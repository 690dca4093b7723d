pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ServiceBackends;
use crate::models::user_flags::requests::UserFlagsRequest;

pub struct UserFlagService {
    backends: ServiceBackends,
}

impl UserFlagService {
    pub fn new_lazy() -> Self {
        Self {
            backends: ServiceBackends::default(),
        }
    }

    pub fn with_backends(backends: ServiceBackends) -> Self {
        Self { backends }
    }

    pub async fn list_user_flags(
        &self,
        request: &HttpRequest,
        req: UserFlagsRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_user_flags(&self.backends, request, req).await
    }
}
