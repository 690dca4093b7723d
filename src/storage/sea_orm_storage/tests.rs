//! 基于内存 SQLite 的存储与权限判定测试

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database};

use super::SeaOrmStorage;
use crate::authorization::{AuthorizationChecker, Capability, Decision, DenyReason};
use crate::models::submissions::entities::SubmissionFilter;
use crate::models::users::entities::{Caller, UserStatus};
use crate::storage::RecordStore;

const FIXTURES: &str = r#"
INSERT INTO users (id, username, role, status, created_at, updated_at) VALUES
    (1, 'teacher', 'user', 'active', 0, 0),
    (2, 'student', 'user', 'active', 0, 0),
    (3, 'admin', 'admin', 'active', 0, 0),
    (4, 'gone', 'user', 'suspended', 0, 0);

INSERT INTO courses (id, fullname, shortname, sortorder, visible, time_modified) VALUES
    (10, 'Algebra', 'ALG', 2, 1, 100),
    (20, 'Biology', 'BIO', 1, 1, 200),
    (30, 'Hidden', 'HID', 3, 0, 300);

INSERT INTO enrolments (course_id, user_id, status, time_created) VALUES
    (10, 1, 'active', 0),
    (20, 1, 'active', 0),
    (30, 1, 'active', 0),
    (10, 2, 'suspended', 0);

INSERT INTO assign (id, course_id, name) VALUES
    (5, 10, 'Essay'),
    (6, 10, 'Lab report'),
    (7, 20, 'Hidden task'),
    (9, 30, 'Quiz prep');

INSERT INTO course_modules (id, course_id, module_id, instance, visible) VALUES
    (50, 10, (SELECT id FROM modules WHERE name = 'assign'), 5, 1),
    (60, 10, (SELECT id FROM modules WHERE name = 'assign'), 6, 1),
    (70, 20, (SELECT id FROM modules WHERE name = 'assign'), 7, 0),
    (80, 10, (SELECT id FROM modules WHERE name = 'forum'), 8, 1),
    (90, 30, (SELECT id FROM modules WHERE name = 'assign'), 9, 1);

INSERT INTO capability_grants (user_id, context_level, instance_id, capability) VALUES
    (1, 'course', 10, 'mod/assign:grade'),
    (1, 'module', 70, 'mod/assign:grade'),
    (1, 'system', 0, 'mod/assign:view');

INSERT INTO assign_grades (id, assignment_id, user_id, time_created, time_modified, grader_id, grade, attempt_number) VALUES
    (1, 5, 42, 10, 10, 1, 60.0, 0),
    (2, 5, 42, 20, 20, 1, 85.5, 1),
    (3, 5, 43, 15, 15, 1, NULL, 0),
    (4, 6, 42, 30, 30, 1, 70.0, 0),
    (20, 6, 42, 35, 35, 1, 72.0, 0);

INSERT INTO assign_submission (id, assignment_id, user_id, time_created, time_modified, status, group_id, attempt_number) VALUES
    (100, 5, 42, 10, 10, 'reopened', 0, 0),
    (101, 5, 42, 20, 20, 'submitted', 0, 1),
    (102, 5, 43, 25, 25, 'draft', 0, 0),
    (104, 6, 42, 40, 40, 'submitted', 0, 0),
    (103, 6, 42, 30, 30, 'draft', 0, 0);

INSERT INTO assignsubmission_onlinetext (assignment_id, submission_id, online_text, online_format) VALUES
    (5, 101, '<p>essay</p>', 1);

INSERT INTO files (id, context_id, component, file_area, item_id, file_path, file_name, time_modified) VALUES
    (1, 50, 'assignsubmission_file', 'submission_files', 101, '/', 'b.pdf', 30),
    (2, 50, 'assignsubmission_file', 'submission_files', 101, '/', '.', 5),
    (3, 50, 'assignsubmission_file', 'submission_files', 101, '/', 'a.pdf', 10),
    (4, 50, 'assignfeedback_file', 'feedback_files', 101, '/', 'c.pdf', 10);

INSERT INTO assign_plugin_config (assignment_id, plugin, subtype, name, value) VALUES
    (5, 'file', 'assignsubmission', 'enabled', '1'),
    (5, 'onlinetext', 'assignsubmission', 'enabled', NULL);

INSERT INTO assign_user_flags (id, assignment_id, user_id, locked, mailed, extension_due_date, workflow_state, allocated_marker) VALUES
    (2, 6, 42, 0, 0, 0, NULL, 0),
    (1, 5, 42, 1, 0, 500, 'inmarking', 1);

INSERT INTO assign_user_mapping (id, assignment_id, user_id) VALUES
    (7, 5, 42),
    (8, 5, 43);
"#;

async fn storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db.execute_unprepared(FIXTURES).await.unwrap();
    SeaOrmStorage::from_connection(db)
}

fn caller(user_id: i64) -> Caller {
    Caller {
        user_id,
        is_site_admin: false,
    }
}

#[tokio::test]
async fn test_users() {
    let storage = storage().await;
    let user = storage.get_user_by_id(4).await.unwrap().unwrap();
    assert_eq!(user.status, UserStatus::Suspended);
    assert!(Caller::from(&storage.get_user_by_id(3).await.unwrap().unwrap()).is_site_admin);
    assert!(storage.get_user_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_only_assign_modules_resolve() {
    let storage = storage().await;
    let modules = storage
        .find_assignment_modules(&[9, 8, 5, 404])
        .await
        .unwrap();
    let found: Vec<(i64, i64)> = modules.iter().map(|m| (m.instance, m.id)).collect();
    assert_eq!(found, vec![(5, 50), (9, 90)]);
}

#[tokio::test]
async fn test_latest_grades() {
    let storage = storage().await;
    let grades = storage.list_latest_grades(&[5, 6], 0).await.unwrap();
    let ids: Vec<i64> = grades.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 20]);
    assert_eq!(grades[0].grade, Some(85.5));
    assert_eq!(grades[1].grade, None);

    let recent = storage.list_latest_grades(&[5, 6], 18).await.unwrap();
    let ids: Vec<i64> = recent.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![2, 4, 20]);
}

#[tokio::test]
async fn test_tied_latest_attempts_all_returned() {
    let storage = storage().await;

    let grades = storage.list_latest_grades(&[6], 0).await.unwrap();
    let ids: Vec<i64> = grades.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![4, 20]);

    let submissions = storage
        .list_latest_submissions(&[6], &SubmissionFilter::default())
        .await
        .unwrap();
    let ids: Vec<i64> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![103, 104]);
}

#[tokio::test]
async fn test_large_assignment_id_lists() {
    let storage = storage().await;
    let mut ids: Vec<i64> = (1_000..21_000).collect();
    ids.push(5);

    let grades = storage.list_latest_grades(&ids, 0).await.unwrap();
    let grade_ids: Vec<i64> = grades.iter().map(|g| g.id).collect();
    assert_eq!(grade_ids, vec![2, 3]);

    let submissions = storage
        .list_latest_submissions(
            &ids,
            &SubmissionFilter {
                status: Some("draft".to_string()),
                since: 0,
                before: Some(100),
            },
        )
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].id, 102);
}

#[tokio::test]
async fn test_latest_submissions_with_filters() {
    let storage = storage().await;

    let all = storage
        .list_latest_submissions(&[5], &SubmissionFilter::default())
        .await
        .unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![101, 102]);

    let submitted = storage
        .list_latest_submissions(
            &[5],
            &SubmissionFilter {
                status: Some("submitted".to_string()),
                since: 0,
                before: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].id, 101);

    let ranged = storage
        .list_latest_submissions(
            &[5],
            &SubmissionFilter {
                status: None,
                since: 21,
                before: Some(25),
            },
        )
        .await
        .unwrap();
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0].id, 102);
}

#[tokio::test]
async fn test_submission_payloads() {
    let storage = storage().await;

    let files = storage.list_submission_files(&[50], &[101]).await.unwrap();
    let ids: Vec<i64> = files.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    let texts = storage.list_online_texts(&[101, 102]).await.unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text.as_deref(), Some("<p>essay</p>"));
}

#[tokio::test]
async fn test_flags_and_mappings_ordered() {
    let storage = storage().await;

    let flags = storage.list_user_flags(&[6, 5]).await.unwrap();
    let ids: Vec<i64> = flags.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let mappings = storage.list_user_mappings(&[5]).await.unwrap();
    let ids: Vec<i64> = mappings.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[tokio::test]
async fn test_courses_and_assignments() {
    let storage = storage().await;

    let courses = storage.list_enrolled_courses(1).await.unwrap();
    let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![20, 10, 30]);
    assert!(storage.list_enrolled_courses(2).await.unwrap().is_empty());

    let assignments = storage.list_course_assignments(10).await.unwrap();
    let cmids: Vec<i64> = assignments.iter().map(|a| a.module.id).collect();
    assert_eq!(cmids, vec![50, 60]);
    assert_eq!(assignments[0].assignment.name, "Essay");
    assert_eq!(assignments[0].assignment.max_attempts, -1);

    let configs = storage.list_plugin_configs(&[5, 6]).await.unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[1].value, None);
}

#[tokio::test]
async fn test_module_authorization() {
    let storage = storage().await;
    let modules = storage.find_assignment_modules(&[5, 7, 9]).await.unwrap();
    let (essay, hidden, quiz) = (&modules[0], &modules[1], &modules[2]);

    let teacher = caller(1);
    assert_eq!(
        storage
            .check_module(&teacher, essay, &Capability::GRADE)
            .await
            .unwrap(),
        Decision::Allowed
    );
    assert_eq!(
        storage
            .check_module(&teacher, essay, &Capability::REVEAL_IDENTITIES)
            .await
            .unwrap(),
        Decision::Denied(DenyReason::MissingCapability(
            Capability::REVEAL_IDENTITIES
        ))
    );
    // 模块隐藏且没有查看隐藏活动的权限
    assert_eq!(
        storage
            .check_module(&teacher, hidden, &Capability::GRADE)
            .await
            .unwrap(),
        Decision::Denied(DenyReason::ContextInaccessible)
    );
    // 课程隐藏
    assert_eq!(
        storage
            .check_module(&teacher, quiz, &Capability::VIEW)
            .await
            .unwrap(),
        Decision::Denied(DenyReason::ContextInaccessible)
    );
    // 选课已停用
    assert_eq!(
        storage
            .check_module(&caller(2), essay, &Capability::VIEW)
            .await
            .unwrap(),
        Decision::Denied(DenyReason::ContextInaccessible)
    );

    let admin = Caller {
        user_id: 3,
        is_site_admin: true,
    };
    assert_eq!(
        storage
            .check_module(&admin, quiz, &Capability::GRADE)
            .await
            .unwrap(),
        Decision::Allowed
    );
}

#[tokio::test]
async fn test_course_authorization() {
    let storage = storage().await;
    let teacher = caller(1);

    assert_eq!(
        storage
            .check_course(&teacher, 10, &[Capability::GRADE])
            .await
            .unwrap(),
        Decision::Allowed
    );
    assert_eq!(
        storage
            .check_course(&teacher, 20, &[Capability::GRADE])
            .await
            .unwrap(),
        Decision::Denied(DenyReason::MissingCapability(Capability::GRADE))
    );
    assert_eq!(
        storage.check_course(&teacher, 30, &[]).await.unwrap(),
        Decision::Denied(DenyReason::ContextInaccessible)
    );
}
