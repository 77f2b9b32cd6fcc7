/// 日志工具模块
///
/// 提供日志初始化和启动信息输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时默认 `info`，详细模式下为 `debug`
///
/// # 参数
/// - `verbose`: 是否显示详细日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能被多次调用，重复初始化直接忽略
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

/// 记录服务启动信息
///
/// # 参数
/// - `config`: 配置
/// - `boards`: 大纲目录中找到的考试局列表
pub fn log_startup(config: &Config, boards: &[String]) {
    info!("{}", "=".repeat(60));
    info!("🚀 大纲服务启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📡 监听地址: http://{}", config.bind_addr());
    info!("📁 大纲目录: {}", config.syllabus_dir.display());
    info!("🖼️ 页面目录: {}", config.views_dir.display());
    info!("📦 静态资源: {}", config.public_dir.display());
    if boards.is_empty() {
        info!("⚠️ 没有找到任何大纲文件");
    } else {
        info!("📚 可用考试局 ({}): {}", boards.len(), boards.join(", "));
    }
    info!("{}", "=".repeat(60));
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
