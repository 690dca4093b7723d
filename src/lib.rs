//! Assign External - 作业模块只读接口服务
//!
//! 基于 Actix Web 构建，为学习平台的作业模块提供评分、提交、作业设置、
//! 用户标记与匿名映射的批量查询接口。
//!
//! # 架构
//! - `authorization`: 权限判定接口
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod authorization;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
