use serde::Serialize;
use ts_rs::TS;

use super::entities::UserFlag;
use crate::models::{ResultGroup, Warning};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserFlagInfo {
    pub id: i64,
    pub userid: i64,
    pub locked: i32,
    pub mailed: i32,
    pub extensionduedate: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub workflowstate: Option<String>,
    pub allocatedmarker: i64,
}

impl From<UserFlag> for UserFlagInfo {
    fn from(flag: UserFlag) -> Self {
        Self {
            id: flag.id,
            userid: flag.user_id,
            locked: flag.locked,
            mailed: flag.mailed,
            extensionduedate: flag.extension_due_date,
            workflowstate: flag.workflow_state,
            allocatedmarker: flag.allocated_marker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentUserFlags {
    pub assignmentid: i64,
    pub userflags: Vec<UserFlagInfo>,
}

impl From<ResultGroup<UserFlag>> for AssignmentUserFlags {
    fn from(group: ResultGroup<UserFlag>) -> Self {
        Self {
            assignmentid: group.parent_id,
            userflags: group.children.into_iter().map(UserFlagInfo::from).collect(),
        }
    }
}

/// 用户标记查询响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct UserFlagsResponse {
    pub assignments: Vec<AssignmentUserFlags>,
    pub warnings: Vec<Warning>,
}
