//! 日志初始化：基于 env_logger，输出到 stderr，stdout 留给命令结果。

use log::LevelFilter;

/// 根据 `-v` 次数选择默认日志级别；设置了 RUST_LOG 时以其为准
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None);
    // 重复初始化（例如测试中）时忽略错误
    let _ = builder.try_init();
}
