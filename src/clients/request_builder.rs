/// 可视化请求构建
///
/// 把一条算法记录转换成可视化服务的完整 URL
use crate::config::Config;
use crate::models::AlgorithmRecord;

/// 大魔方外层块转动的别名替换（需在去掉空格之前执行）
const BLOCK_TURN_ALIASES: [(&str, &str); 2] = [("2R2", "r2R2"), ("2U2", "u2U2")];

/// 可视化请求构建器
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    format: String,
    arrow_color: String,
}

impl RequestBuilder {
    /// 创建新的请求构建器
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.visualiser_base_url.trim_end_matches('/').to_string(),
            format: config.image_format.clone(),
            arrow_color: config.arrow_color.clone(),
        }
    }

    /// 图标文件扩展名
    pub fn format(&self) -> &str {
        &self.format
    }

    /// 构建请求 URL
    ///
    /// 参数顺序：额外参数、`pzl`、`case`、可选 `view`、可选 `arw`
    pub fn build_url(&self, record: &AlgorithmRecord) -> String {
        let case = human_to_visualiser(&record.visualiser_algorithm(), record.size);

        let mut assignments: Vec<String> = record
            .parameters
            .iter()
            .map(|(param, value)| format!("{}={}", param, value))
            .collect();
        assignments.push(format!("pzl={}", record.size));
        assignments.push(format!("case={}", case));
        if let Some(view) = record.view {
            assignments.push(format!("view={}", view));
        }
        if !record.arrows.is_empty() {
            assignments.push(format!("arw={}", record.arrows.join(",")));
        }

        format!(
            "{}?fmt={}&ac={}&{}",
            self.base_url,
            self.format,
            self.arrow_color,
            assignments.join("&")
        )
    }
}

/// 去掉只用于展示的字符（括号和空格）
pub fn strip_presentation(alg: &str) -> String {
    alg.chars().filter(|c| !matches!(c, '(' | ')' | ' ')).collect()
}

/// 把人读公式转换成可视化服务接受的写法
pub fn human_to_visualiser(alg: &str, size: u8) -> String {
    let mut raw = alg.to_string();
    if size >= 4 {
        for (origin, substitution) in BLOCK_TURN_ALIASES {
            raw = raw.replace(origin, substitution);
        }
    }
    strip_presentation(&raw)
}
