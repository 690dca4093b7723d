//! 内存中的存储与权限判定，供服务层测试使用

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::authorization::{AuthorizationChecker, Capability, Decision, DenyReason};
use crate::errors::Result;
use crate::models::{
    assignments::entities::{Assignment, AssignmentModule, Course, CourseModule, PluginConfig},
    grades::entities::Grade,
    submissions::entities::{OnlineText, SubmissionFile, SubmissionFilter, SubmissionRecord},
    user_flags::entities::UserFlag,
    user_mappings::entities::UserMapping,
    users::entities::{Caller, User},
};
use crate::storage::RecordStore;

pub fn caller(user_id: i64) -> Caller {
    Caller {
        user_id,
        is_site_admin: false,
    }
}

pub fn module(id: i64, course_id: i64, instance: i64) -> CourseModule {
    CourseModule {
        id,
        course_id,
        instance,
        visible: true,
    }
}

pub fn course(id: i64, sortorder: i64) -> Course {
    Course {
        id,
        fullname: format!("Course {id}"),
        shortname: format!("C{id}"),
        sortorder,
        visible: true,
        time_modified: 1_700_000_000,
    }
}

pub fn assignment(id: i64, course_id: i64) -> Assignment {
    Assignment {
        id,
        course_id,
        name: format!("Assignment {id}"),
        no_submissions: 0,
        submission_drafts: 0,
        send_notifications: 0,
        send_late_notifications: 0,
        due_date: 0,
        allow_submissions_from_date: 0,
        grade: 100,
        time_modified: 0,
        completion_submit: 0,
        cutoff_date: 0,
        team_submission: 0,
        require_all_team_members_submit: 0,
        team_submission_grouping_id: 0,
        blind_marking: 0,
        reveal_identities: 0,
        attempt_reopen_method: "none".to_string(),
        max_attempts: -1,
        marking_workflow: 0,
        marking_allocation: 0,
        require_submission_statement: 0,
    }
}

/// 按 (作业, 用户) 只保留最高尝试次数的行，与数据库实现的子查询一致
fn latest_attempts<T: Clone>(
    rows: &[T],
    assignment_ids: &[i64],
    key: impl Fn(&T) -> (i64, i64, i64),
) -> Vec<T> {
    let mut max_attempt: HashMap<(i64, i64), i64> = HashMap::new();
    for row in rows {
        let (assignment_id, user_id, attempt) = key(row);
        if assignment_ids.contains(&assignment_id) {
            let entry = max_attempt.entry((assignment_id, user_id)).or_insert(attempt);
            *entry = (*entry).max(attempt);
        }
    }
    rows.iter()
        .filter(|row| {
            let (assignment_id, user_id, attempt) = key(row);
            max_attempt.get(&(assignment_id, user_id)) == Some(&attempt)
        })
        .cloned()
        .collect()
}

#[derive(Default)]
pub struct FakeStore {
    pub users: Vec<User>,
    pub modules: Vec<CourseModule>,
    pub grades: Vec<Grade>,
    pub submissions: Vec<SubmissionRecord>,
    pub files: Vec<SubmissionFile>,
    pub online_texts: Vec<OnlineText>,
    pub user_flags: Vec<UserFlag>,
    pub user_mappings: Vec<UserMapping>,
    pub courses: Vec<Course>,
    /// (user_id, course_id)
    pub enrolments: Vec<(i64, i64)>,
    pub assignments: Vec<AssignmentModule>,
    pub configs: Vec<PluginConfig>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeStore {
    /// 已调用的存储方法，按调用顺序
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.record("get_user_by_id");
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_assignment_modules(&self, assignment_ids: &[i64]) -> Result<Vec<CourseModule>> {
        self.record("find_assignment_modules");
        let mut modules: Vec<CourseModule> = self
            .modules
            .iter()
            .filter(|m| assignment_ids.contains(&m.instance))
            .cloned()
            .collect();
        modules.sort_by_key(|m| m.instance);
        Ok(modules)
    }

    async fn list_latest_grades(&self, assignment_ids: &[i64], since: i64) -> Result<Vec<Grade>> {
        self.record("list_latest_grades");
        let mut grades: Vec<Grade> = latest_attempts(&self.grades, assignment_ids, |g| {
            (g.assignment_id, g.user_id, g.attempt_number)
        })
        .into_iter()
        .filter(|g| g.time_modified >= since)
        .collect();
        grades.sort_by_key(|g| (g.assignment_id, g.id));
        Ok(grades)
    }

    async fn list_latest_submissions(
        &self,
        assignment_ids: &[i64],
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionRecord>> {
        self.record("list_latest_submissions");
        let mut submissions: Vec<SubmissionRecord> =
            latest_attempts(&self.submissions, assignment_ids, |s| {
                (s.assignment_id, s.user_id, s.attempt_number)
            })
            .into_iter()
            .filter(|s| filter.matches(s))
            .collect();
        submissions.sort_by_key(|s| (s.assignment_id, s.id));
        Ok(submissions)
    }

    async fn list_submission_files(
        &self,
        context_ids: &[i64],
        submission_ids: &[i64],
    ) -> Result<Vec<SubmissionFile>> {
        self.record("list_submission_files");
        let mut files: Vec<SubmissionFile> = self
            .files
            .iter()
            .filter(|f| context_ids.contains(&f.context_id) && submission_ids.contains(&f.item_id))
            .cloned()
            .collect();
        files.sort_by_key(|f| (f.time_modified, f.id));
        Ok(files)
    }

    async fn list_online_texts(&self, submission_ids: &[i64]) -> Result<Vec<OnlineText>> {
        self.record("list_online_texts");
        Ok(self
            .online_texts
            .iter()
            .filter(|t| submission_ids.contains(&t.submission_id))
            .cloned()
            .collect())
    }

    async fn list_user_flags(&self, assignment_ids: &[i64]) -> Result<Vec<UserFlag>> {
        self.record("list_user_flags");
        let mut flags: Vec<UserFlag> = self
            .user_flags
            .iter()
            .filter(|f| assignment_ids.contains(&f.assignment_id))
            .cloned()
            .collect();
        flags.sort_by_key(|f| (f.assignment_id, f.id));
        Ok(flags)
    }

    async fn list_user_mappings(&self, assignment_ids: &[i64]) -> Result<Vec<UserMapping>> {
        self.record("list_user_mappings");
        let mut mappings: Vec<UserMapping> = self
            .user_mappings
            .iter()
            .filter(|m| assignment_ids.contains(&m.assignment_id))
            .cloned()
            .collect();
        mappings.sort_by_key(|m| (m.assignment_id, m.id));
        Ok(mappings)
    }

    async fn list_enrolled_courses(&self, user_id: i64) -> Result<Vec<Course>> {
        self.record("list_enrolled_courses");
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| self.enrolments.contains(&(user_id, c.id)))
            .cloned()
            .collect();
        courses.sort_by_key(|c| (c.sortorder, c.id));
        Ok(courses)
    }

    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<AssignmentModule>> {
        self.record("list_course_assignments");
        let mut modules: Vec<AssignmentModule> = self
            .assignments
            .iter()
            .filter(|a| a.module.course_id == course_id)
            .cloned()
            .collect();
        modules.sort_by_key(|a| a.module.id);
        Ok(modules)
    }

    async fn list_plugin_configs(&self, assignment_ids: &[i64]) -> Result<Vec<PluginConfig>> {
        self.record("list_plugin_configs");
        Ok(self
            .configs
            .iter()
            .filter(|c| assignment_ids.contains(&c.assignment_id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct FakeAuthorizer {
    /// 被拒绝的课程模块 ID
    pub denied_modules: HashSet<i64>,
    /// 上下文不可访问的课程
    pub inaccessible_courses: HashSet<i64>,
    /// 在课程上下文中持有的权限
    pub course_grants: HashSet<(i64, Capability)>,
}

impl FakeAuthorizer {
    pub fn denying_modules(module_ids: &[i64]) -> Self {
        Self {
            denied_modules: module_ids.iter().copied().collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl AuthorizationChecker for FakeAuthorizer {
    async fn check_module(
        &self,
        _caller: &Caller,
        module: &CourseModule,
        capability: &Capability,
    ) -> Result<Decision> {
        if self.denied_modules.contains(&module.id) {
            return Ok(Decision::Denied(DenyReason::MissingCapability(
                capability.clone(),
            )));
        }
        Ok(Decision::Allowed)
    }

    async fn check_course(
        &self,
        _caller: &Caller,
        course_id: i64,
        capabilities: &[Capability],
    ) -> Result<Decision> {
        if self.inaccessible_courses.contains(&course_id) {
            return Ok(Decision::Denied(DenyReason::ContextInaccessible));
        }
        for capability in capabilities {
            if !self
                .course_grants
                .contains(&(course_id, capability.clone()))
            {
                return Ok(Decision::Denied(DenyReason::MissingCapability(
                    capability.clone(),
                )));
            }
        }
        Ok(Decision::Allowed)
    }
}
