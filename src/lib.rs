//! # Alg Cards
//!
//! 一个用于生成魔方公式学习卡片的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 算法记录、内置目录、TOML 目录加载
//! - `AlgorithmRecord` - 一条算法（OLL / PLL / 指定前面颜色 / 通用）
//! - `Catalog` - 一个算法集合及其 Anki 牌组名
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - 可视化服务的 URL 构建和 HTTP 调用
//! - `RequestBuilder` - 记录 → 请求 URL
//! - `VisualiserClient` - 实现 `ImageSource`，下载图标字节
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `ImageFetcher` - 有界并发下载
//! - `AnkiWriter` - 写 Anki 导入表格
//! - `LatexWriter` - 写双面打印卡片（`layout` 排版 + `notation` 记号转换）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/card_generator` - 一次完整的生成流程
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{ImageSource, RequestBuilder, VisualiserClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AlgorithmRecord, AlgorithmSet, Catalog};
pub use orchestrator::{App, GenerationJob, GenerationSummary};
