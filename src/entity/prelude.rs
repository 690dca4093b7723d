//! 预导入模块，方便使用

pub use super::assign::{Entity as Assign, Model as AssignModel};
pub use super::assign_grades::{Entity as AssignGrades, Model as AssignGradeModel};
pub use super::assign_plugin_config::{
    Entity as AssignPluginConfig, Model as AssignPluginConfigModel,
};
pub use super::assign_submission::{Entity as AssignSubmission, Model as AssignSubmissionModel};
pub use super::assign_user_flags::{Entity as AssignUserFlags, Model as AssignUserFlagModel};
pub use super::assign_user_mapping::{
    Entity as AssignUserMapping, Model as AssignUserMappingModel,
};
pub use super::assignsubmission_onlinetext::{
    Entity as AssignsubmissionOnlinetext, Model as OnlineTextModel,
};
pub use super::capability_grants::{Entity as CapabilityGrants, Model as CapabilityGrantModel};
pub use super::course_modules::{Entity as CourseModules, Model as CourseModuleModel};
pub use super::courses::{Entity as Courses, Model as CourseModel};
pub use super::enrolments::{Entity as Enrolments, Model as EnrolmentModel};
pub use super::files::{Entity as Files, Model as FileModel};
pub use super::modules::{Entity as Modules, Model as ModuleModel};
pub use super::users::{Entity as Users, Model as UserModel};
