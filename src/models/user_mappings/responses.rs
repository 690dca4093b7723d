use serde::Serialize;
use ts_rs::TS;

use super::entities::UserMapping;
use crate::models::{ResultGroup, Warning};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserMappingInfo {
    pub id: i64,
    pub userid: i64,
}

impl From<UserMapping> for UserMappingInfo {
    fn from(mapping: UserMapping) -> Self {
        Self {
            id: mapping.id,
            userid: mapping.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentUserMappings {
    pub assignmentid: i64,
    pub mappings: Vec<UserMappingInfo>,
}

impl From<ResultGroup<UserMapping>> for AssignmentUserMappings {
    fn from(group: ResultGroup<UserMapping>) -> Self {
        Self {
            assignmentid: group.parent_id,
            mappings: group
                .children
                .into_iter()
                .map(UserMappingInfo::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserMappingsResponse {
    pub assignments: Vec<AssignmentUserMappings>,
    pub warnings: Vec<Warning>,
}
