use serde::Serialize;
use ts_rs::TS;

use super::entities::Grade;
use crate::models::{ResultGroup, Warning};

/// 单条评分
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct GradeInfo {
    pub id: i64,
    pub userid: i64,
    pub timecreated: i64,
    pub timemodified: i64,
    pub grader: i64,
    /// 以文本形式返回，保留五位小数；未评分为空串
    pub grade: String,
}

impl From<Grade> for GradeInfo {
    fn from(grade: Grade) -> Self {
        Self {
            id: grade.id,
            userid: grade.user_id,
            timecreated: grade.time_created,
            timemodified: grade.time_modified,
            grader: grade.grader_id,
            grade: grade.grade.map(|g| format!("{g:.5}")).unwrap_or_default(),
        }
    }
}

/// 某个作业下的评分
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct AssignmentGrades {
    pub assignmentid: i64,
    pub grades: Vec<GradeInfo>,
}

impl From<ResultGroup<Grade>> for AssignmentGrades {
    fn from(group: ResultGroup<Grade>) -> Self {
        Self {
            assignmentid: group.parent_id,
            grades: group.children.into_iter().map(GradeInfo::from).collect(),
        }
    }
}

/// 评分查询响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "assign.ts")]
pub struct GradesResponse {
    pub assignments: Vec<AssignmentGrades>,
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: Option<f64>) -> Grade {
        Grade {
            id: 1,
            assignment_id: 9,
            user_id: 42,
            time_created: 100,
            time_modified: 200,
            grader_id: 7,
            grade: value,
            attempt_number: 0,
        }
    }

    #[test]
    fn test_grade_is_rendered_as_decimal_text() {
        assert_eq!(GradeInfo::from(grade(Some(85.0))).grade, "85.00000");
        assert_eq!(GradeInfo::from(grade(Some(72.125))).grade, "72.12500");
        assert_eq!(GradeInfo::from(grade(None)).grade, "");
    }

    #[test]
    fn test_grade_fields_use_wire_names() {
        let json = serde_json::to_value(GradeInfo::from(grade(Some(1.0)))).unwrap();
        assert_eq!(json["userid"], 42);
        assert_eq!(json["grader"], 7);
        assert_eq!(json["timemodified"], 200);
        assert!(json.get("attempt_number").is_none());
    }
}
