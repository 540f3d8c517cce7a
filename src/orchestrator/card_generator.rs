//! 卡片生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的卡片生成流程。
//!
//! ## 核心流程
//!
//! 1. **加载目录**：内置集合或自定义 TOML 文件
//! 2. **名称过滤**：按 glob 模式选出要下载图标的算法（在任何 I/O 之前完成）
//! 3. **准备目录**：创建输出目录
//! 4. **并发下载**：委托 `ImageFetcher` 下载选中算法的图标
//! 5. **写入表格**：整个集合写入 Anki 表格
//! 6. **打印卡片**：可选，整个集合写入 LaTeX 文档
//! 7. **全局统计**：输出最终统计
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单条算法的细节
//! - **资源所有者**：唯一持有图标来源（HTTP 客户端）的模块
//! - **快速失败**：任何一步出错立即返回，不做部分成功

use crate::clients::{ImageSource, RequestBuilder, VisualiserClient};
use crate::config::Config;
use crate::error::{AppResult, FileError, SelectionError};
use crate::models::{load_catalog_file, AlgorithmRecord, AlgorithmSet, Catalog};
use crate::services::{AnkiWriter, DownloadJob, IconPaths, ImageFetcher, LatexWriter};
use crate::utils::logging;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 一次生成任务的参数（来自命令行）
#[derive(Debug, Clone)]
pub struct GenerationJob {
    /// 输出目录，不存在时自动创建
    pub target_dir: PathBuf,
    /// 内置算法集合
    pub set: AlgorithmSet,
    /// 自定义目录文件，指定时代替内置集合
    pub catalog_file: Option<PathBuf>,
    /// 名称过滤（glob）
    pub pattern: String,
    /// 跳过图标下载，复用已有图标
    pub skip_images: bool,
    /// 是否生成打印卡片
    pub learning_cards: bool,
}

impl GenerationJob {
    pub fn new(target_dir: impl Into<PathBuf>, set: AlgorithmSet) -> Self {
        Self {
            target_dir: target_dir.into(),
            set,
            catalog_file: None,
            pattern: "*".to_string(),
            skip_images: false,
            learning_cards: false,
        }
    }
}

/// 一次生成的结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// 名称过滤匹配到的算法数量
    pub selected: usize,
    /// 下载的图标数量
    pub downloaded: usize,
    /// 表格数据行数
    pub rows: usize,
    /// 打印卡片页数（正反面一对算一页）
    pub pages: Option<usize>,
}

/// 应用主结构
pub struct App<S: ImageSource = VisualiserClient> {
    config: Config,
    source: Arc<S>,
    requests: RequestBuilder,
}

impl App<VisualiserClient> {
    /// 使用真实可视化服务初始化应用
    pub fn new(config: Config) -> AppResult<Self> {
        let client = VisualiserClient::new(&config)?;
        Ok(Self::with_source(config, client))
    }
}

impl<S: ImageSource> App<S> {
    /// 使用指定的图标来源初始化应用
    pub fn with_source(config: Config, source: S) -> Self {
        let requests = RequestBuilder::new(&config);
        Self {
            config,
            source: Arc::new(source),
            requests,
        }
    }

    /// 运行一次完整的生成流程
    pub async fn run(&self, job: &GenerationJob) -> AppResult<GenerationSummary> {
        let catalog = self.load_catalog(job).await?;
        logging::log_startup(&catalog.label, self.config.effective_workers());

        let selected = select(&catalog, &job.pattern)?;
        logging::log_selection(selected.len(), catalog.records.len(), &job.pattern);

        tokio::fs::create_dir_all(&job.target_dir)
            .await
            .map_err(|source| FileError::CreateDirFailed {
                path: job.target_dir.clone(),
                source,
            })?;

        let icons = IconPaths::new(&job.target_dir, self.requests.format());
        let mut summary = GenerationSummary {
            selected: selected.len(),
            ..Default::default()
        };

        if job.skip_images {
            info!("⏭️ 跳过图标下载，复用 {} 中已有的图标", job.target_dir.display());
        } else {
            summary.downloaded = self.download_icons(&selected, &icons).await?;
        }

        let anki = AnkiWriter::with_file_name(&job.target_dir, &self.config.anki_file_name);
        summary.rows = anki.write(&catalog.records, &icons, &catalog.deck)?;

        if job.learning_cards {
            let latex = LatexWriter::new(
                job.target_dir.join(&self.config.latex_file_name),
                self.config.cards_per_row,
                self.config.cards_per_col,
            );
            summary.pages = Some(latex.write(&catalog.records, &icons)?);
        }

        logging::print_final_stats(summary.downloaded, summary.rows, &job.target_dir);
        Ok(summary)
    }

    /// 加载目录
    async fn load_catalog(&self, job: &GenerationJob) -> AppResult<Catalog> {
        let catalog = match &job.catalog_file {
            Some(path) => {
                info!("\n📁 正在加载自定义目录: {}", path.display());
                load_catalog_file(path).await?
            }
            None => Catalog::builtin(job.set),
        };

        if catalog.records.is_empty() {
            return Err(SelectionError::EmptyCatalog { set: catalog.label }.into());
        }
        Ok(catalog)
    }

    /// 下载选中算法的图标
    async fn download_icons(
        &self,
        selected: &[&AlgorithmRecord],
        icons: &IconPaths,
    ) -> AppResult<usize> {
        let jobs: Vec<DownloadJob> = selected
            .iter()
            .map(|record| DownloadJob::new(self.requests.build_url(record), icons.path(record)))
            .collect();

        let fetcher = ImageFetcher::new(Arc::clone(&self.source), self.config.effective_workers());
        fetcher.download_all(jobs).await
    }
}

/// 按名称 glob 模式选出算法
///
/// 模式无效或没有匹配项时返回错误
pub fn select<'a>(catalog: &'a Catalog, pattern: &str) -> AppResult<Vec<&'a AlgorithmRecord>> {
    let matcher = glob::Pattern::new(pattern).map_err(|source| SelectionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let selected: Vec<&AlgorithmRecord> = catalog
        .records
        .iter()
        .filter(|record| matcher.matches(&record.name))
        .collect();

    if selected.is_empty() {
        return Err(SelectionError::NoMatch {
            pattern: pattern.to_string(),
            set: catalog.label.clone(),
        }
        .into());
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_select_all_by_default() {
        let catalog = Catalog::builtin(AlgorithmSet::Pll);
        assert_eq!(select(&catalog, "*").unwrap().len(), 21);
    }

    #[test]
    fn test_select_by_glob() {
        let catalog = Catalog::builtin(AlgorithmSet::Pll);
        let names: Vec<&str> = select(&catalog, "A?")
            .unwrap()
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Aa", "Ab"]);
    }

    #[test]
    fn test_select_no_match() {
        let catalog = Catalog::builtin(AlgorithmSet::Pll);
        let result = select(&catalog, "Nonexistent*");
        assert!(matches!(
            result,
            Err(AppError::Selection(SelectionError::NoMatch { ref set, .. })) if set == "pll"
        ));
    }

    #[test]
    fn test_select_invalid_pattern() {
        let catalog = Catalog::builtin(AlgorithmSet::Pll);
        assert!(matches!(
            select(&catalog, "[A"),
            Err(AppError::Selection(SelectionError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_generation_job_defaults() {
        let job = GenerationJob::new("/tmp/out", AlgorithmSet::Oll);
        assert_eq!(job.pattern, "*");
        assert!(!job.skip_images);
        assert!(!job.learning_cards);
        assert!(job.catalog_file.is_none());
    }
}
