use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 算法选择错误（在任何 I/O 之前发生）
    #[error("选择错误: {0}")]
    Selection(#[from] SelectionError),
    /// 图标下载错误
    #[error("下载错误: {0}")]
    Fetch(#[from] FetchError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 算法选择错误
#[derive(Debug, Error)]
pub enum SelectionError {
    /// 名称过滤没有匹配到任何算法
    #[error("算法 '{pattern}' 在集合 {set} 中没有匹配项")]
    NoMatch { pattern: String, set: String },
    /// glob 模式无法解析
    #[error("无效的算法名称模式 '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// 目录为空
    #[error("算法集合 {set} 为空")]
    EmptyCatalog { set: String },
    /// 同一目录中出现重名算法（图标文件会互相覆盖）
    #[error("算法集合 {set} 中有重名算法 '{name}'")]
    DuplicateName { name: String, set: String },
    /// 算法名称不能作为图标文件名
    #[error("算法集合 {set} 中的名称 '{name}' 不能作为文件名（为空或包含路径分隔符）")]
    InvalidName { name: String, set: String },
}

/// 图标下载错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 创建 HTTP 客户端失败
    #[error("无法创建 HTTP 客户端: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// 网络请求失败（包括超时）
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务返回非成功状态码
    #[error("服务返回错误状态 {status} ({url})")]
    BadStatus { url: String, status: u16 },
    /// 下载任务异常结束
    #[error("下载任务执行失败: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 创建目录失败
    #[error("无法创建目录 {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 卡片网格尺寸无效
    #[error("卡片网格尺寸无效: {columns} 列 x {rows} 行")]
    InvalidGrid { columns: usize, rows: usize },
    /// 并发数无效
    #[error("最大并发数必须大于 0")]
    InvalidWorkers,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建状态码错误
    pub fn bad_status(url: impl Into<String>, status: u16) -> Self {
        AppError::Fetch(FetchError::BadStatus {
            url: url.into(),
            status,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
