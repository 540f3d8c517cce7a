use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时下载的图标数量（None 表示按 CPU 核数自动决定）
    pub max_workers: Option<usize>,
    /// 可视化服务地址
    pub visualiser_base_url: String,
    /// 图标格式
    pub image_format: String,
    /// 箭头颜色
    pub arrow_color: String,
    /// 单个请求超时（秒）
    pub request_timeout_secs: u64,
    /// 每页列数
    pub cards_per_row: usize,
    /// 每页行数
    pub cards_per_col: usize,
    /// Anki 导入文件名
    pub anki_file_name: String,
    /// LaTeX 文件名
    pub latex_file_name: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_workers: None,
            visualiser_base_url: "https://visualcube.api.cubing.net".to_string(),
            image_format: "svg".to_string(),
            arrow_color: "black".to_string(),
            request_timeout_secs: 30,
            cards_per_row: 3,
            cards_per_col: 3,
            anki_file_name: "ankiCardSet.csv".to_string(),
            latex_file_name: "Lernkarten.tex".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_workers: std::env::var("MAX_WORKERS").ok().and_then(|v| v.parse().ok()).or(default.max_workers),
            visualiser_base_url: std::env::var("VISUALISER_BASE_URL").unwrap_or(default.visualiser_base_url),
            image_format: std::env::var("IMAGE_FORMAT").unwrap_or(default.image_format),
            arrow_color: std::env::var("ARROW_COLOR").unwrap_or(default.arrow_color),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            cards_per_row: std::env::var("CARDS_PER_ROW").ok().and_then(|v| v.parse().ok()).unwrap_or(default.cards_per_row),
            cards_per_col: std::env::var("CARDS_PER_COL").ok().and_then(|v| v.parse().ok()).unwrap_or(default.cards_per_col),
            anki_file_name: std::env::var("ANKI_FILE_NAME").unwrap_or(default.anki_file_name),
            latex_file_name: std::env::var("LATEX_FILE_NAME").unwrap_or(default.latex_file_name),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.cards_per_row == 0 || self.cards_per_col == 0 {
            return Err(ConfigError::InvalidGrid {
                columns: self.cards_per_row,
                rows: self.cards_per_col,
            }
            .into());
        }
        if self.max_workers == Some(0) {
            return Err(ConfigError::InvalidWorkers.into());
        }
        Ok(())
    }

    /// 实际使用的并发数
    ///
    /// 未指定时取 `min(32, CPU 核数 + 4)`
    pub fn effective_workers(&self) -> usize {
        self.max_workers.unwrap_or_else(|| {
            let cpus = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1);
            (cpus + 4).min(32)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_three_by_three() {
        let config = Config::default();
        assert_eq!(config.cards_per_row, 3);
        assert_eq!(config.cards_per_col, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = Config {
            cards_per_col: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(crate::AppError::Config(ConfigError::InvalidGrid { columns: 3, rows: 0 }))
        ));
    }

    #[test]
    fn test_effective_workers() {
        let fixed = Config {
            max_workers: Some(2),
            ..Config::default()
        };
        assert_eq!(fixed.effective_workers(), 2);

        let auto = Config::default().effective_workers();
        assert!(auto >= 5 && auto <= 32);
    }
}
