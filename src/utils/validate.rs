use once_cell::sync::Lazy;
use regex::Regex;

// 仅字母，空串合法
static ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]*$").expect("Invalid alpha regex"));

// 权限名：component/area:name，例如 mod/assign:grade
static CAPABILITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*/[a-z][a-z0-9_]*:[a-z][a-z0-9_]*$")
        .expect("Invalid capability regex")
});

/// 时间戳参数必须为非负数
pub fn validate_timestamp(name: &str, value: i64) -> Result<(), String> {
    if value < 0 {
        return Err(format!("Parameter '{name}' must be a non-negative timestamp"));
    }
    Ok(())
}

/// 字符串参数只能包含字母
pub fn validate_alpha(name: &str, value: &str) -> Result<(), String> {
    if !ALPHA_RE.is_match(value) {
        return Err(format!("Parameter '{name}' must contain only letters"));
    }
    Ok(())
}

/// 权限名格式校验
pub fn validate_capability(capability: &str) -> Result<(), String> {
    if !CAPABILITY_RE.is_match(capability) {
        return Err(format!("Invalid capability name: '{capability}'"));
    }
    Ok(())
}
