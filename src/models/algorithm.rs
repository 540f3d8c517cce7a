use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 可视化视角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// 顶面俯视
    Plan,
    /// 透明视图
    Trans,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Plan => "plan",
            View::Trans => "trans",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 前面颜色（黄色朝上时）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FrontColour {
    Red,
    Blue,
    Orange,
    Green,
}

impl FrontColour {
    /// 撤销把该颜色转到前面的 y 转体
    ///
    /// 蓝色为默认前面，不需要转体
    pub fn undo_rotation(self) -> &'static str {
        match self {
            FrontColour::Red => "y'",
            FrontColour::Blue => "",
            FrontColour::Orange => "y",
            FrontColour::Green => "y2'",
        }
    }
}

/// 算法变体
///
/// 各变体只在固定参数和可视化转体规则上不同
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// 顶层朝向（OLL），只显示黄色
    Oll {
        setup_before: String,
        setup_after: String,
    },
    /// 顶层排列（PLL），带箭头
    Pll {
        setup_before: String,
        setup_after: String,
    },
    /// 需要从某个前面执行的公式
    Front { colour: FrontColour },
    /// 通用公式，参数全部自定义
    General,
}

/// 一条算法记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRecord {
    pub name: String,
    pub size: u8,
    alg: String,
    pub kind: AlgorithmKind,
    pub view: Option<View>,
    pub arrows: Vec<String>,
    pub parameters: BTreeMap<String, String>,
    pub tags: Vec<String>,
}

impl AlgorithmRecord {
    /// OLL 记录：俯视、灰掉非顶面、默认标签 `3x3x3 OLL`
    pub fn oll(name: impl Into<String>, size: u8, alg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            alg: alg.into(),
            kind: AlgorithmKind::Oll {
                setup_before: String::new(),
                setup_after: String::new(),
            },
            view: Some(View::Plan),
            arrows: Vec::new(),
            parameters: BTreeMap::from([("sch".to_string(), "ysssss".to_string())]),
            tags: vec!["3x3x3".to_string(), "OLL".to_string()],
        }
    }

    /// PLL 记录：俯视、带箭头、默认标签 `3x3x3 PLL`
    pub fn pll(name: impl Into<String>, size: u8, alg: impl Into<String>, arrows: &[&str]) -> Self {
        Self {
            name: name.into(),
            size,
            alg: alg.into(),
            kind: AlgorithmKind::Pll {
                setup_before: String::new(),
                setup_after: String::new(),
            },
            view: Some(View::Plan),
            arrows: arrows.iter().map(|a| a.to_string()).collect(),
            parameters: BTreeMap::new(),
            tags: vec!["3x3x3".to_string(), "PLL".to_string()],
        }
    }

    /// 前面公式记录
    pub fn front(
        name: impl Into<String>,
        size: u8,
        alg: impl Into<String>,
        colour: FrontColour,
        tags: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            size,
            alg: alg.into(),
            kind: AlgorithmKind::Front { colour },
            view: Some(View::Plan),
            arrows: Vec::new(),
            parameters: BTreeMap::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// 通用记录
    pub fn general(
        name: impl Into<String>,
        size: u8,
        alg: impl Into<String>,
        view: Option<View>,
        tags: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            size,
            alg: alg.into(),
            kind: AlgorithmKind::General,
            view,
            arrows: Vec::new(),
            parameters: BTreeMap::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// 设置可视化前置转体（仅 OLL / PLL 生效）
    pub fn with_setup_before(mut self, rotation: impl Into<String>) -> Self {
        if let AlgorithmKind::Oll { setup_before, .. } | AlgorithmKind::Pll { setup_before, .. } =
            &mut self.kind
        {
            *setup_before = rotation.into();
        }
        self
    }

    /// 设置可视化后置转体（仅 OLL / PLL 生效）
    pub fn with_setup_after(mut self, rotation: impl Into<String>) -> Self {
        if let AlgorithmKind::Oll { setup_after, .. } | AlgorithmKind::Pll { setup_after, .. } =
            &mut self.kind
        {
            *setup_after = rotation.into();
        }
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn extend_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    pub fn with_arrows(mut self, arrows: Vec<String>) -> Self {
        self.arrows = arrows;
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 给人看的公式
    pub fn human_algorithm(&self) -> &str {
        &self.alg
    }

    /// 发送给可视化服务的公式
    ///
    /// 可视化服务画出的是"执行该公式后会被还原"的状态，整体转体会改变图标朝向，
    /// 因此在公式前后补上转体，使所有图标都是黄色朝上、蓝色朝前。
    pub fn visualiser_algorithm(&self) -> String {
        match &self.kind {
            AlgorithmKind::Oll {
                setup_before,
                setup_after,
            }
            | AlgorithmKind::Pll {
                setup_before,
                setup_after,
            } => join_moves(&[setup_before.as_str(), self.alg.as_str(), setup_after.as_str()]),
            AlgorithmKind::Front { colour } => {
                join_moves(&["x'", self.alg.as_str(), colour.undo_rotation()])
            }
            AlgorithmKind::General => self.alg.clone(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn join_moves(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
