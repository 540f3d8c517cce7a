//! 图标文件命名 - 业务能力层
//!
//! 记录名 + 图片格式决定图标文件名，表格、打印文档和下载任务共用同一套规则

use crate::models::AlgorithmRecord;
use std::path::PathBuf;

/// 图标文件命名规则：`<目标目录>/<记录名>.<格式>`
#[derive(Debug, Clone)]
pub struct IconPaths {
    dir: PathBuf,
    format: String,
}

impl IconPaths {
    pub fn new(dir: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            format: format.into(),
        }
    }

    /// 图标文件名（不含目录），表格和打印文档里引用的就是它
    pub fn file_name(&self, record: &AlgorithmRecord) -> String {
        format!("{}.{}", record.name, self.format)
    }

    /// 图标文件完整路径
    pub fn path(&self, record: &AlgorithmRecord) -> PathBuf {
        self.dir.join(self.file_name(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_naming() {
        let icons = IconPaths::new("/tmp/cards", "svg");
        let record = AlgorithmRecord::general("PLL Aa", 3, "R", None, &[]);

        assert_eq!(icons.file_name(&record), "PLL Aa.svg");
        assert_eq!(icons.path(&record), PathBuf::from("/tmp/cards/PLL Aa.svg"));
    }
}
