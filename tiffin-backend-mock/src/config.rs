/// Mock backend configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MOCK_READ_DELAY_MS | 200 | Simulated latency for read operations |
/// | MOCK_WRITE_DELAY_MS | 300 | Simulated latency for write operations |
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Simulated read latency (milliseconds)
    pub read_delay_ms: u64,
    /// Simulated write latency (milliseconds)
    pub write_delay_ms: u64,
}

impl MockConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            read_delay_ms: std::env::var("MOCK_READ_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            write_delay_ms: std::env::var("MOCK_WRITE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }

    /// Zero-latency configuration, 常用于测试场景
    pub fn instant() -> Self {
        Self {
            read_delay_ms: 0,
            write_delay_ms: 0,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
