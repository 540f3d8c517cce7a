/// 可视化服务客户端
///
/// 封装对图标渲染服务的 HTTP 调用
use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// 图标来源：给定 URL 返回图标字节
pub trait ImageSource: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = AppResult<Vec<u8>>> + Send;
}

/// 可视化服务客户端
#[derive(Debug, Clone)]
pub struct VisualiserClient {
    http: reqwest::Client,
}

impl VisualiserClient {
    /// 创建新的客户端，每个请求带固定超时
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { http })
    }
}

impl ImageSource for VisualiserClient {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        debug!("收到 {} 字节: {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
