//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体查询，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assign;
pub mod assign_grades;
pub mod assign_plugin_config;
pub mod assign_submission;
pub mod assign_user_flags;
pub mod assign_user_mapping;
pub mod assignsubmission_onlinetext;
pub mod capability_grants;
pub mod course_modules;
pub mod courses;
pub mod enrolments;
pub mod files;
pub mod modules;
pub mod users;
