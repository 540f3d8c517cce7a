//! Anki 导入表格写入服务 - 业务能力层
//!
//! 只负责"写 ankiCardSet.csv"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::AlgorithmRecord;
use crate::services::icon_paths::IconPaths;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 默认输出文件名
pub const DEFAULT_FILE_NAME: &str = "ankiCardSet.csv";

/// Anki 表格写入服务
///
/// 职责：
/// - 写入三行元数据头（分隔符、笔记类型、牌组）
/// - 每条算法一行：图标、名称、公式、标签
/// - 保持输入顺序，字段不做转义
pub struct AnkiWriter {
    path: PathBuf,
}

impl AnkiWriter {
    /// 创建新的写入服务
    ///
    /// 如果给定路径是已存在的目录，则在其中使用默认文件名
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_file_name(path, DEFAULT_FILE_NAME)
    }

    /// 使用自定义默认文件名创建
    pub fn with_file_name(path: impl Into<PathBuf>, file_name: &str) -> Self {
        let path = path.into();
        let path = if path.is_dir() {
            path.join(file_name)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入表格
    ///
    /// # 参数
    /// - `records`: 要写入的算法（按顺序）
    /// - `icons`: 图标命名规则
    /// - `deck`: Anki 牌组名
    ///
    /// # 返回
    /// 返回写入的数据行数
    pub fn write(
        &self,
        records: &[AlgorithmRecord],
        icons: &IconPaths,
        deck: &str,
    ) -> AppResult<usize> {
        debug!("写入 Anki 表格: {} | 牌组: {}", self.path.display(), deck);

        let file = File::create(&self.path).map_err(|e| AppError::write_failed(&self.path, e))?;
        let mut out = BufWriter::new(file);

        self.write_rows(&mut out, records, icons, deck)
            .and_then(|_| out.flush())
            .map_err(|e| AppError::write_failed(&self.path, e))?;

        info!("✓ 已写入 Anki 表格: {} ({} 行)", self.path.display(), records.len());
        Ok(records.len())
    }

    fn write_rows<W: Write>(
        &self,
        out: &mut W,
        records: &[AlgorithmRecord],
        icons: &IconPaths,
        deck: &str,
    ) -> std::io::Result<()> {
        writeln!(out, "#separator:tab")?;
        writeln!(out, "#notetype:cubingalg+")?;
        writeln!(out, "#deck:{}", deck)?;

        for record in records {
            writeln!(
                out,
                "<img src=\"{}\">\t{}\t{}\t{}",
                icons.file_name(record),
                record.name,
                record.human_algorithm(),
                record.tags.join(" ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    #[test]
    fn test_header_then_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let icons = IconPaths::new(dir.path(), "svg");
        let records = catalog::pll();

        let writer = AnkiWriter::new(dir.path().join("deck.csv"));
        let rows = writer.write(&records, &icons, "Cubing::3x3x3::PLL").unwrap();
        assert_eq!(rows, records.len());

        let content = std::fs::read_to_string(writer.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3 + records.len());
        assert_eq!(lines[0], "#separator:tab");
        assert_eq!(lines[1], "#notetype:cubingalg+");
        assert_eq!(lines[2], "#deck:Cubing::3x3x3::PLL");

        for (line, record) in lines[3..].iter().zip(&records) {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 4);
            assert_eq!(fields[0], format!("<img src=\"{}.svg\">", record.name));
            assert_eq!(fields[1], record.name);
            assert_eq!(fields[2], record.human_algorithm());
            assert_eq!(fields[3], record.tags.join(" "));
        }
    }

    #[test]
    fn test_directory_path_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AnkiWriter::new(dir.path());
        assert_eq!(writer.path(), dir.path().join(DEFAULT_FILE_NAME));

        let icons = IconPaths::new(dir.path(), "png");
        let record = AlgorithmRecord::general("Sune", 3, "R U R' U R U2 R'", None, &["OLL"]);
        writer.write(&[record], &icons, "Test").unwrap();

        let content = std::fs::read_to_string(dir.path().join(DEFAULT_FILE_NAME)).unwrap();
        assert!(content.ends_with("<img src=\"Sune.png\">\tSune\tR U R' U R U2 R'\tOLL\n"));
    }

    #[test]
    fn test_empty_records_writes_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AnkiWriter::new(dir.path());
        let rows = writer
            .write(&[], &IconPaths::new(dir.path(), "svg"), "Empty")
            .unwrap();

        assert_eq!(rows, 0);
        let content = std::fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_unwritable_path_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AnkiWriter::new(dir.path().join("missing").join("deck.csv"));
        let result = writer.write(&[], &IconPaths::new(dir.path(), "svg"), "X");
        assert!(matches!(
            result,
            Err(AppError::File(crate::error::FileError::WriteFailed { .. }))
        ));
    }
}
