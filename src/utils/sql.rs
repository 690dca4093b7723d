//! 原生 SQL 辅助

use sea_orm::DbBackend;

/// 生成 `count` 个占位符，编号从 `start` 开始（PostgreSQL 为 `$n`，其余为 `?`）
pub fn placeholders(backend: DbBackend, start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| match backend {
            DbBackend::Postgres => format!("${n}"),
            _ => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
