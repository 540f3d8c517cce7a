//! 图标并发下载服务 - 业务能力层
//!
//! ## 职责
//!
//! 按固定并发上限从图标来源下载所有图标，写入各自的目标文件。
//!
//! ## 行为
//!
//! - 使用 Semaphore 限制同时进行的请求数量
//! - 任意一个任务失败（非 2xx、网络错误、超时）立即中止整批，剩余任务被取消
//! - 不重试；已经写好的文件保留
//! - 每个任务写入不同的文件，完成顺序无关

use crate::clients::ImageSource;
use crate::error::{AppError, AppResult};
use crate::utils::logging::truncate_text;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// 一个下载任务：从 `url` 下载，写入 `dest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub url: String,
    pub dest: PathBuf,
}

impl DownloadJob {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
        }
    }
}

/// 图标下载服务
pub struct ImageFetcher<S: ImageSource> {
    source: Arc<S>,
    max_workers: usize,
}

impl<S: ImageSource> ImageFetcher<S> {
    /// 创建新的下载服务
    ///
    /// # 参数
    /// - `source`: 图标来源（共享只读）
    /// - `max_workers`: 最大并发请求数，0 按 1 处理
    pub fn new(source: Arc<S>, max_workers: usize) -> Self {
        Self {
            source,
            max_workers: max_workers.max(1),
        }
    }

    /// 下载全部图标
    ///
    /// # 返回
    /// 全部成功时返回写入的文件数量；否则返回第一个失败的错误
    pub async fn download_all(&self, jobs: Vec<DownloadJob>) -> AppResult<usize> {
        let total = jobs.len();
        if total == 0 {
            return Ok(0);
        }
        info!("\n🖼️ 开始下载 {} 个图标 (并发 {})", total, self.max_workers);

        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut tasks = JoinSet::new();

        for job in jobs {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                // Semaphore 不会被关闭
                let _permit = semaphore.acquire_owned().await.ok();
                fetch_one(source.as_ref(), &job).await
            });
        }

        let mut written = 0;
        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(result) => result,
                Err(e) => Err(AppError::from(crate::error::FetchError::TaskFailed(e))),
            };

            if let Err(e) = outcome {
                error!("❌ 图标下载失败，中止剩余 {} 个任务: {}", tasks.len(), e);
                tasks.abort_all();
                return Err(e);
            }

            written += 1;
            if written % 10 == 0 || written == total {
                info!("  进度: {}/{}", written, total);
            }
        }

        info!("✓ 图标下载完成: {} 个", written);
        Ok(written)
    }
}

async fn fetch_one<S: ImageSource>(source: &S, job: &DownloadJob) -> AppResult<()> {
    debug!("下载: {}", truncate_text(&job.url, 120));

    let bytes = source.fetch(&job.url).await?;
    tokio::fs::write(&job.dest, &bytes)
        .await
        .map_err(|e| AppError::write_failed(&job.dest, e))?;

    debug!("✓ 已保存 {} ({} 字节)", job.dest.display(), bytes.len());
    Ok(())
}
