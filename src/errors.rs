//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_assign_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AssignError {
            $($variant(String),)*
        }

        impl AssignError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssignError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssignError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssignError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AssignError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssignError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_assign_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    Authentication("E007", "Authentication Error"),
    Authorization("E008", "Authorization Error"),
    Configuration("E009", "Configuration Error"),
}

impl AssignError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssignError {}

impl From<sea_orm::DbErr> for AssignError {
    fn from(err: sea_orm::DbErr) -> Self {
        AssignError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for AssignError {
    fn from(err: std::io::Error) -> Self {
        AssignError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for AssignError {
    fn from(err: serde_json::Error) -> Self {
        AssignError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AssignError {
    fn from(err: config::ConfigError) -> Self {
        AssignError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AssignError::database_config("test").code(), "E001");
        assert_eq!(AssignError::database_operation("test").code(), "E003");
        assert_eq!(AssignError::validation("test").code(), "E004");
        assert_eq!(AssignError::configuration("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AssignError::authorization("test").error_type(),
            "Authorization Error"
        );
        assert_eq!(
            AssignError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AssignError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = AssignError::not_found("assignment 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("assignment 7"));
    }

    #[test]
    fn test_from_conversions() {
        let err: AssignError = serde_json::from_str::<i64>("x").unwrap_err().into();
        assert_eq!(err.code(), "E006");

        let err: AssignError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
