/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info 级别
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `set_name`: 算法集合名称
/// - `max_workers`: 最大并发数
pub fn log_startup(set_name: &str, max_workers: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 魔方公式卡片生成");
    info!("🧩 算法集合: {}", set_name);
    info!("📊 最大并发数: {}", max_workers);
    info!("{}", "=".repeat(60));
}

/// 记录算法选择信息
///
/// # 参数
/// - `selected`: 匹配到的算法数量
/// - `total`: 集合中的算法总数
/// - `pattern`: 名称过滤模式
pub fn log_selection(selected: usize, total: usize, pattern: &str) {
    info!("✓ 模式 '{}' 匹配到 {}/{} 个算法", pattern, selected, total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `downloaded`: 下载的图标数量
/// - `rows`: 写入的卡片行数
/// - `target_dir`: 输出目录
pub fn print_final_stats(downloaded: usize, rows: usize, target_dir: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("🖼️ 下载图标: {}", downloaded);
    info!("🗂️ 卡片数量: {}", rows);
    info!("{}", "=".repeat(60));
    info!("\n输出目录: {}", target_dir.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
