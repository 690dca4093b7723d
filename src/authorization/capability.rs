use std::borrow::Cow;

use crate::utils::validate::validate_capability;

/// 权限名，形如 `mod/assign:grade`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// 查看评分与提交
    pub const GRADE: Capability = Capability(Cow::Borrowed("mod/assign:grade"));
    /// 查看作业
    pub const VIEW: Capability = Capability(Cow::Borrowed("mod/assign:view"));
    /// 查看匿名批阅下的真实身份
    pub const REVEAL_IDENTITIES: Capability =
        Capability(Cow::Borrowed("mod/assign:revealidentities"));
    pub const VIEW_HIDDEN_COURSES: Capability =
        Capability(Cow::Borrowed("moodle/course:viewhiddencourses"));
    pub const VIEW_HIDDEN_ACTIVITIES: Capability =
        Capability(Cow::Borrowed("moodle/course:viewhiddenactivities"));

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_capability(s)?;
        Ok(Capability(Cow::Owned(s.to_string())))
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_constants() {
        let cap: Capability = "mod/assign:grade".parse().unwrap();
        assert_eq!(cap, Capability::GRADE);
        assert_eq!(Capability::REVEAL_IDENTITIES.as_str(), "mod/assign:revealidentities");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert!("assign:grade".parse::<Capability>().is_err());
        assert!("mod/assign:".parse::<Capability>().is_err());
    }
}
