pub mod assignments;
pub mod grades;
pub mod lookup;
pub mod submissions;
pub mod user_flags;
pub mod user_mappings;

#[cfg(test)]
pub(crate) mod fakes;

pub use assignments::AssignmentService;
pub use grades::GradeService;
pub use submissions::SubmissionService;
pub use user_flags::UserFlagService;
pub use user_mappings::UserMappingService;

use actix_web::{HttpRequest, Result as ActixResult, error::ErrorInternalServerError, web};
use std::sync::Arc;
use tracing::error;

use crate::authorization::AuthorizationChecker;
use crate::storage::RecordStore;

/// 服务依赖的存储与权限判定
///
/// 未显式注入时从 app_data 中获取。
#[derive(Clone, Default)]
pub struct ServiceBackends {
    storage: Option<Arc<dyn RecordStore>>,
    authorizer: Option<Arc<dyn AuthorizationChecker>>,
}

impl ServiceBackends {
    pub fn new(storage: Arc<dyn RecordStore>, authorizer: Arc<dyn AuthorizationChecker>) -> Self {
        Self {
            storage: Some(storage),
            authorizer: Some(authorizer),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn RecordStore>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => app_data(request, "RecordStore"),
        }
    }

    pub(crate) fn get_authorizer(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<Arc<dyn AuthorizationChecker>> {
        match &self.authorizer {
            Some(authorizer) => Ok(authorizer.clone()),
            None => app_data(request, "AuthorizationChecker"),
        }
    }
}

fn app_data<T: ?Sized + 'static>(request: &HttpRequest, name: &str) -> ActixResult<Arc<T>> {
    request
        .app_data::<web::Data<Arc<T>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("{} not found in app data", name);
            ErrorInternalServerError(format!("{name} not configured"))
        })
}
