use crate::error::{AppError, AppResult, FileError};
use crate::models::algorithm::{AlgorithmRecord, FrontColour, View};
use crate::models::catalog::Catalog;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

const DEFAULT_DECK: &str = "Cubing::Custom";

/// TOML 目录文件
#[derive(Debug, Deserialize)]
struct CatalogFile {
    deck: Option<String>,
    #[serde(default, rename = "algorithm")]
    algorithms: Vec<AlgorithmEntry>,
}

/// 变体名称
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    Oll,
    Pll,
    Front,
    #[default]
    General,
}

/// 文件中的一条算法
#[derive(Debug, Deserialize)]
struct AlgorithmEntry {
    name: String,
    #[serde(default = "default_size")]
    size: u8,
    alg: String,
    #[serde(default)]
    kind: EntryKind,
    view: Option<View>,
    #[serde(default)]
    arrows: Vec<String>,
    tags: Option<Vec<String>>,
    front: Option<FrontColour>,
    #[serde(default)]
    setup_before: String,
    #[serde(default)]
    setup_after: String,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
}

fn default_size() -> u8 {
    3
}

impl AlgorithmEntry {
    fn into_record(self) -> AlgorithmRecord {
        let mut record = match self.kind {
            EntryKind::Oll => AlgorithmRecord::oll(self.name, self.size, self.alg)
                .with_setup_before(self.setup_before)
                .with_setup_after(self.setup_after),
            EntryKind::Pll => AlgorithmRecord::pll(self.name, self.size, self.alg, &[])
                .with_arrows(self.arrows)
                .with_setup_before(self.setup_before)
                .with_setup_after(self.setup_after),
            EntryKind::Front => AlgorithmRecord::front(
                self.name,
                self.size,
                self.alg,
                self.front.unwrap_or(FrontColour::Blue),
                &[],
            ),
            EntryKind::General => {
                AlgorithmRecord::general(self.name, self.size, self.alg, self.view, &[])
                    .with_arrows(self.arrows)
            }
        };

        if matches!(self.kind, EntryKind::Front | EntryKind::General) {
            for (key, value) in self.parameters {
                record = record.with_parameter(key, value);
            }
        }
        if let Some(tags) = self.tags {
            record.tags = tags;
        }
        record
    }
}

/// 解析 TOML 文本为算法目录
///
/// `label` 用于日志和错误信息
pub fn parse_catalog(content: &str, label: &str) -> Result<Catalog, toml::de::Error> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(Catalog {
        label: label.to_string(),
        deck: file.deck.unwrap_or_else(|| DEFAULT_DECK.to_string()),
        records: file
            .algorithms
            .into_iter()
            .map(AlgorithmEntry::into_record)
            .collect(),
    })
}

/// 从 TOML 文件加载自定义算法目录
pub async fn load_catalog_file(path: &Path) -> AppResult<Catalog> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::read_failed(path, e))?;

    let label = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let catalog = parse_catalog(&content, &label).map_err(|source| FileError::TomlParseFailed {
        path: path.to_path_buf(),
        source,
    })?;
    catalog.check_names()?;

    tracing::info!(
        "成功加载 {} 个算法: {}",
        catalog.records.len(),
        path.display()
    );

    Ok(catalog)
}
