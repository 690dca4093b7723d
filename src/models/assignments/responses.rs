use serde::Serialize;
use ts_rs::TS;

use super::entities::{AssignmentModule, Course, PluginConfig};
use crate::models::Warning;

/// 作业配置项
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentConfigInfo {
    pub id: i64,
    pub assignment: i64,
    pub plugin: String,
    pub subtype: String,
    pub name: String,
    pub value: String,
}

impl From<PluginConfig> for AssignmentConfigInfo {
    fn from(config: PluginConfig) -> Self {
        Self {
            id: config.id,
            assignment: config.assignment_id,
            plugin: config.plugin,
            subtype: config.subtype,
            name: config.name,
            value: config.value.unwrap_or_default(),
        }
    }
}

/// 作业信息
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentInfo {
    pub id: i64,
    pub cmid: i64,
    pub course: i64,
    pub name: String,
    pub nosubmissions: i32,
    pub submissiondrafts: i32,
    pub sendnotifications: i32,
    pub sendlatenotifications: i32,
    pub duedate: i64,
    pub allowsubmissionsfromdate: i64,
    pub grade: i64,
    pub timemodified: i64,
    pub completionsubmit: i32,
    pub cutoffdate: i64,
    pub teamsubmission: i32,
    pub requireallteammemberssubmit: i32,
    pub teamsubmissiongroupingid: i64,
    pub blindmarking: i32,
    pub revealidentities: i32,
    pub attemptreopenmethod: String,
    pub maxattempts: i32,
    pub markingworkflow: i32,
    pub markingallocation: i32,
    pub requiresubmissionstatement: i32,
    pub configs: Vec<AssignmentConfigInfo>,
}

impl AssignmentInfo {
    pub fn new(module: AssignmentModule, configs: Vec<PluginConfig>) -> Self {
        let AssignmentModule { module, assignment } = module;
        Self {
            id: assignment.id,
            cmid: module.id,
            course: assignment.course_id,
            name: assignment.name,
            nosubmissions: assignment.no_submissions,
            submissiondrafts: assignment.submission_drafts,
            sendnotifications: assignment.send_notifications,
            sendlatenotifications: assignment.send_late_notifications,
            duedate: assignment.due_date,
            allowsubmissionsfromdate: assignment.allow_submissions_from_date,
            grade: assignment.grade,
            timemodified: assignment.time_modified,
            completionsubmit: assignment.completion_submit,
            cutoffdate: assignment.cutoff_date,
            teamsubmission: assignment.team_submission,
            requireallteammemberssubmit: assignment.require_all_team_members_submit,
            teamsubmissiongroupingid: assignment.team_submission_grouping_id,
            blindmarking: assignment.blind_marking,
            revealidentities: assignment.reveal_identities,
            attemptreopenmethod: assignment.attempt_reopen_method,
            maxattempts: assignment.max_attempts,
            markingworkflow: assignment.marking_workflow,
            markingallocation: assignment.marking_allocation,
            requiresubmissionstatement: assignment.require_submission_statement,
            configs: configs.into_iter().map(AssignmentConfigInfo::from).collect(),
        }
    }
}

/// 课程及其可见作业
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct CourseAssignments {
    pub id: i64,
    pub fullname: String,
    pub shortname: String,
    pub timemodified: i64,
    pub assignments: Vec<AssignmentInfo>,
}

impl CourseAssignments {
    pub fn new(course: Course, assignments: Vec<AssignmentInfo>) -> Self {
        Self {
            id: course.id,
            fullname: course.fullname,
            shortname: course.shortname,
            timemodified: course.time_modified,
            assignments,
        }
    }
}

/// 作业列表响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentsResponse {
    pub courses: Vec<CourseAssignments>,
    pub warnings: Vec<Warning>,
}
