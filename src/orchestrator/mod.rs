//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次生成任务的流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `card_generator` - 卡片生成器
//! - 加载算法目录（内置集合或 TOML 文件）
//! - 按名称过滤算法
//! - 控制并发下载（委托 `ImageFetcher`）
//! - 写入 Anki 表格和打印卡片
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! card_generator (处理一个算法集合)
//!     ↓
//! services (能力层：下载 / 表格 / 排版 / 记号)
//!     ↓
//! clients (可视化服务：URL 构建 / HTTP)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → services → clients
//! 2. **无业务逻辑**：只做调度和统计，不做具体格式判断

pub mod card_generator;

// 重新导出主要类型
pub use card_generator::{select, App, GenerationJob, GenerationSummary};
