//! 内置算法目录
//!
//! 纯数据：程序启动时构建一次，之后只读

use crate::error::{AppResult, SelectionError};
use crate::models::algorithm::{AlgorithmRecord, FrontColour, View};
use std::collections::HashSet;

/// 算法集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmSet {
    /// 全部集合
    All,
    /// 3x3x3 PLL
    Pll,
    /// 3x3x3 OLL
    Oll,
    /// 两步 OLL 的第二步
    TwoLookOll,
    /// 4x4x4 及以上
    BigCube,
}

impl AlgorithmSet {
    /// 命令行使用的名称
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmSet::All => "all",
            AlgorithmSet::Pll => "pll",
            AlgorithmSet::Oll => "oll",
            AlgorithmSet::TwoLookOll => "2-look-oll",
            AlgorithmSet::BigCube => "big-cube",
        }
    }

    /// Anki 牌组名称
    pub fn deck_name(self) -> &'static str {
        match self {
            AlgorithmSet::All => "Cubing::Algorithms",
            AlgorithmSet::Pll => "Cubing::3x3x3::PLL with Arrows",
            AlgorithmSet::Oll => "Cubing::3x3x3::OLL",
            AlgorithmSet::TwoLookOll => "Cubing::3x3x3::2-Look OLL",
            AlgorithmSet::BigCube => "Cubing::NxNxN::Parities and Edge Pairing",
        }
    }

    /// 构建该集合的算法列表
    pub fn records(self) -> Vec<AlgorithmRecord> {
        match self {
            AlgorithmSet::All => {
                let mut all = pll();
                all.extend(oll());
                all.extend(two_look_oll());
                all.extend(big_cube());
                all
            }
            AlgorithmSet::Pll => pll(),
            AlgorithmSet::Oll => oll(),
            AlgorithmSet::TwoLookOll => two_look_oll(),
            AlgorithmSet::BigCube => big_cube(),
        }
    }
}

impl std::fmt::Display for AlgorithmSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 一个待处理的算法目录
#[derive(Debug, Clone)]
pub struct Catalog {
    /// 集合名称（用于日志和错误信息）
    pub label: String,
    /// Anki 牌组名称
    pub deck: String,
    pub records: Vec<AlgorithmRecord>,
}

impl Catalog {
    pub fn builtin(set: AlgorithmSet) -> Self {
        Self {
            label: set.as_str().to_string(),
            deck: set.deck_name().to_string(),
            records: set.records(),
        }
    }

    /// 检查算法名称
    ///
    /// 名称直接用作图标文件名，所以必须唯一、非空，且不含路径分隔符
    pub fn check_names(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for record in &self.records {
            let name = record.name.as_str();
            if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(SelectionError::InvalidName {
                    name: name.to_string(),
                    set: self.label.clone(),
                }
                .into());
            }
            if !seen.insert(name) {
                return Err(SelectionError::DuplicateName {
                    name: name.to_string(),
                    set: self.label.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// 3x3x3 PLL，共 21 个
pub fn pll() -> Vec<AlgorithmRecord> {
    vec![
        AlgorithmRecord::pll("Aa", 3, "x (R' U R') D2 (R U' R')(D2 R2)", &["U0U2-s8", "U2U8-s8", "U8U0-s8"])
            .with_setup_after("x'"),
        AlgorithmRecord::pll("Ab", 3, "x (R2 D2)(R U R') D2 (R U' R)", &["U8U2-s8", "U0U8-s8", "U2U0-s8"])
            .with_setup_after("x'"),
        AlgorithmRecord::pll("E", 3, "R2 U R' y (R U' R' U) (R U' R' U) (R U' R' U) y' R U' R2", &["U0U2", "U2U0", "U6U8", "U8U6"]),
        AlgorithmRecord::pll("F", 3, "(R' U' F')(R U R' U')(R' F)(R2 U')(R' U' R U) R' U R", &["U1U7", "U7U1", "U2U8", "U8U2"]),
        AlgorithmRecord::pll("Ga", 3, "(R2' u)(R' U R' U')(R u') R2 y' (R' U R)", &["U0U2-s8", "U2U6-s8", "U6U0-s8", "U1U3-s7", "U3U5-s7", "U5U1-s7"])
            .with_setup_after("y"),
        AlgorithmRecord::pll("Gb", 3, "(R' U' R) y (R2 u)(R' U R U')(R u') R2", &["U0U6-s8", "U6U8-s8", "U8U0-s8", "U1U7-s7", "U7U3-s7", "U3U1-s7"])
            .with_setup_after("y'"),
        AlgorithmRecord::pll("Gc", 3, "(R2 u')(R U' R U)(R' u) R2 y (R U' R')", &["U0U6-s8", "U6U8-s8", "U8U0-s8", "U7U3-s7", "U3U5-s7", "U5U7-s7"])
            .with_setup_after("y'"),
        AlgorithmRecord::pll("Gd", 3, "(R U R') y' (R2 u')(R U' R' U)(R' u) R2", &["U0U2-s8", "U2U6-s8", "U6U0-s8", "U1U3-s7", "U3U7-s7", "U7U1-s7"])
            .with_setup_after("y"),
        AlgorithmRecord::pll("H", 3, "(M2' U' M2') U2 (M2' U' M2')", &["U1U7", "U7U1", "U5U3", "U3U5"]),
        AlgorithmRecord::pll("Ja", 3, "(R' U L' U2) (R U' R' U2 R) L U'", &["U0U2", "U2U0", "U1U3", "U3U1"]),
        AlgorithmRecord::pll("Jb", 3, "(R U R' F')(R U R' U')(R' F)(R2 U')(R' U')", &["U2U8", "U8U2", "U5U7", "U7U5"]),
        AlgorithmRecord::pll("Na", 3, "z (R' U R') D (R2 U' R) (U D') (R' D R2 U' R D')", &["U0U8", "U8U0", "U1U7", "U7U1"])
            .with_setup_after("z'"),
        AlgorithmRecord::pll("Nb", 3, "(R' U R U') (R' F' U') (F R U) (R' F R' F') (R U' R)", &["U0U8", "U8U0", "U3U5", "U5U3"]),
        AlgorithmRecord::pll("Ra", 3, "(R U2')(R' U2)(R B')(R' U' R U)(R B R2 U)", &["U1U5", "U5U1", "U6U8", "U8U6"]),
        AlgorithmRecord::pll("Rb", 3, "(R' U2)(R U2')(R' F)(R U R' U')(R' F' R2 U')", &["U0U2", "U2U0", "U5U7", "U7U5"]),
        AlgorithmRecord::pll("T", 3, "(R U R' U')(R' F)(R2 U')(R' U' R U) R' F'", &["U3U5-s8", "U5U3-s8", "U2U8", "U8U2"]),
        AlgorithmRecord::pll("Ua", 3, "(R2 U')(R' U' R U)(R U)(R U' R)", &["U5U1-s7", "U1U3-s7", "U3U5-s7"]),
        AlgorithmRecord::pll("Ub", 3, "(R2' U)(R U R' U')(R' U')(R' U R')", &["U3U5-s7", "U5U7-s7", "U7U3-s7"]),
        AlgorithmRecord::pll("V", 3, "(R' U R' U') x2 y' (R' U R' U') l (R U' R' U) R U", &["U1U5", "U5U1", "U0U8", "U8U0"])
            .with_setup_after("x' y'"),
        AlgorithmRecord::pll("Y", 3, "F (R U')(R' U' R U)(R' F')(R U R' U')(R' F R F')", &["U1U3", "U3U1", "U0U8", "U8U0"]),
        AlgorithmRecord::pll("Z", 3, "(R' U' R U') R U (R U' R' U) R U R2 U' R' (U2)", &["U1U5", "U5U1", "U3U7", "U7U3"]),
    ]
}

/// 3x3x3 OLL，共 57 个，按形状分组
pub fn oll() -> Vec<AlgorithmRecord> {
    vec![
        // 棱块已全部朝上
        AlgorithmRecord::oll("OCLL1 - 21", 3, "(R U R' U)(R U' R' U)(R U2 R')")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL2 - 22", 3, "R U2 R2 U' R2 U' R2 U2 R")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL3 - 23", 3, "R2 D (R' U2 R) D' (R' U2 R')")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL4 - 24", 3, "(r U R' U') (r' F R F')")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL5 - 25", 3, "x (R' U R) D' (R' U' R) D x'")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL6 - 26", 3, "R' U' R U' R' U2 R")
            .extend_tags(&["2-Look-OLL"]),
        AlgorithmRecord::oll("OCLL7 - 27", 3, "R U R' U R U2 R'")
            .extend_tags(&["2-Look-OLL"]),
        // T 形
        AlgorithmRecord::oll("T1 - 33", 3, "(R U R' U')(R' F R F')"),
        AlgorithmRecord::oll("T2 - 45", 3, "F (R U R' U') F'"),
        // 方块形
        AlgorithmRecord::oll("S1 - 5", 3, "(r' U2 R U R' U r)"),
        AlgorithmRecord::oll("S2 - 6", 3, "(r U2 R' U' R U' r')"),
        // C 形
        AlgorithmRecord::oll("C1 - 34", 3, "(R U R2' U') (R' F R U) R U' F'"),
        AlgorithmRecord::oll("C2 - 46", 3, "R' U' (R' F R F') U R"),
        // W 形
        AlgorithmRecord::oll("W1 - 36", 3, "(R' U' R U')(R' U R U) (l U' R' U) x"),
        AlgorithmRecord::oll("W2 - 38", 3, "(R U R' U)(R U' R' U')(R' F R F')"),
        // 角块已朝上，棱块翻转
        AlgorithmRecord::oll("E1 - 28", 3, "(r U R' U') M (U R U' R')"),
        AlgorithmRecord::oll("E2 - 57", 3, "(R U R' U') M' (U R U' r')"),
        // P 形
        AlgorithmRecord::oll("P1 - 31", 3, "(R' U' F)(U R U' R') F' R"),
        AlgorithmRecord::oll("P2 - 32", 3, "R U B' (U' R' U) (R B R')"),
        AlgorithmRecord::oll("P3 - 43", 3, "F' U' L' U L F"),
        AlgorithmRecord::oll("P4 - 44", 3, "f (R U R' U') f'"),
        // I 形
        AlgorithmRecord::oll("I1 - 51", 3, "f (R U R' U')(R U R' U') f'"),
        AlgorithmRecord::oll("I2 - 52", 3, "(R U R' U R U') y (R U' R') F'"),
        AlgorithmRecord::oll("I3 - 55", 3, "R U2 R2 U' (R U' R' U2) (F R F')"),
        AlgorithmRecord::oll("I4 - 56", 3, "r' U' r (U' R' U R) (U' R' U R) r' U r"),
        // 鱼形
        AlgorithmRecord::oll("F1 - 9", 3, "(R U R' U') R' F (R2 U R' U') F'"),
        AlgorithmRecord::oll("F2 - 10", 3, "(R U R' U) (R' F R F') (R U2' R')"),
        AlgorithmRecord::oll("F3 - 35", 3, "(R U2) (R2 F R F') (R U2 R')"),
        AlgorithmRecord::oll("F4 - 37", 3, "F (R U' R' U') (R U R' F')"),
        // 骑士形
        AlgorithmRecord::oll("K1 - 13", 3, "(r U' r') (U' r U r') y' (R' U R)"),
        AlgorithmRecord::oll("K2 - 14", 3, "(R' F R) (U R' F' R) y' (R U' R')"),
        AlgorithmRecord::oll("K3 - 15", 3, "(r' U' r) (R' U' R U) (r' U r)"),
        AlgorithmRecord::oll("K4 - 16", 3, "(r U r') (R U R' U') (r U' r')"),
        // 不规则形
        AlgorithmRecord::oll("A1 - 29", 3, "(R U R' U') (R U' R') (F' U' F) (R U R')"),
        AlgorithmRecord::oll("A2 - 30", 3, "F U (R U2 R' U') (R U2 R' U') F'"),
        AlgorithmRecord::oll("A3 - 41", 3, "(R U R' U R U2' R') F (R U R' U') F'"),
        AlgorithmRecord::oll("A4 - 42", 3, "(R' U' R U' R' U2 R) F (R U R' U') F'"),
        // L 形
        AlgorithmRecord::oll("L1 - 47", 3, "F' (L' U' L U)(L' U' L U) F"),
        AlgorithmRecord::oll("L2 - 48", 3, "F (R U R' U')(R U R' U') F'"),
        AlgorithmRecord::oll("L3 - 49", 3, "r U' r2' U r2 U r2' U' r"),
        AlgorithmRecord::oll("L4 - 50", 3, "r' U r2 U' r2' U' r2 U r'"),
        AlgorithmRecord::oll("L5 - 53", 3, "(r' U' R U') (R' U R U') R' U2 r"),
        AlgorithmRecord::oll("L6 - 54", 3, "(r U R' U) (R U' R' U) R U2' r'"),
        // 闪电形
        AlgorithmRecord::oll("B1 - 7", 3, "r U R' U R U2 r'"),
        AlgorithmRecord::oll("B2 - 8", 3, "r' U' R U' R' U2 r"),
        AlgorithmRecord::oll("B3 - 11", 3, "r' (R2 U R' U R U2 R') U M'"),
        AlgorithmRecord::oll("B4 - 12", 3, "M' (R' U' R U' R' U2 R) U' M"),
        AlgorithmRecord::oll("B5 - 39", 3, "(L F')(L' U' L U) F U' L'"),
        AlgorithmRecord::oll("B6 - 40", 3, "(R' F)(R U R' U') F' U R"),
        // 棱块全部未朝上
        AlgorithmRecord::oll("O1 - 1", 3, "(R U2)(R2 F R F') U2 (R' F R F')"),
        AlgorithmRecord::oll("O2 - 2", 3, "F (R U R' U') F' f (R U R' U') f'"),
        AlgorithmRecord::oll("O3 - 3", 3, "f (R U R' U') f' U' F (R U R' U') F'"),
        AlgorithmRecord::oll("O4 - 4", 3, "f (R U R' U') f' U F (R U R' U') F'"),
        AlgorithmRecord::oll("O5 - 17", 3, "(R U R' U) (R' F R F') U2 (R' F R F')"),
        AlgorithmRecord::oll("O6 - 18", 3, "r U R' U R U2 r2 U' R U' R' U2 r"),
        AlgorithmRecord::oll("O7 - 19", 3, "r' U2 R U R' U r2 U2 R' U' R U' r'"),
        AlgorithmRecord::oll("O8 - 20", 3, "M U (R U R' U') M2 (U R U' r')"),
    ]
}

/// 两步 OLL：取带 `2-Look-OLL` 标签的 OLL，重新编号
pub fn two_look_oll() -> Vec<AlgorithmRecord> {
    oll()
        .into_iter()
        .filter(|record| record.has_tag("2-Look-OLL"))
        .enumerate()
        .map(|(i, record)| record.renamed(format!("2LOLL {}", i + 1)))
        .collect()
}

/// 4x4x4 / 5x5x5 的奇偶校验和棱块配对
pub fn big_cube() -> Vec<AlgorithmRecord> {
    vec![
        AlgorithmRecord::front("4x4x4 Edge Pairing", 4, "u' R F' U R' F u", FrontColour::Green, &["4x4x4", "EdgePairing"])
            .with_parameter("fc", EDGE_PAIRING_4_FC),
        AlgorithmRecord::pll("4x4x4 PLL Parity", 4, "2R2 U2 2R2 u2 2R2 2U2", &["U13U2", "U2U13", "U14U1", "U1U14"])
            .with_tags(&["4x4x4", "PLL", "parity"]),
        AlgorithmRecord::oll("4x4x4 OLL Parity", 4, "r U2 x r U2 r U2 r' U2 l U2 r' U2 r U2 r' U2 r'")
            .with_tags(&["4x4x4", "OLL", "parity"]),
        AlgorithmRecord::general("5x5x5 Parity", 5, "r2 B2 U2 l U2 r' U2 r U2 F2 r F2 l' B2 r2", Some(View::Plan), &["5x5x5", "parity"])
            .with_parameter("fc", PARITY_5_FC),
        AlgorithmRecord::front("5x5x5 Edge Pairing 1", 5, "u' R F' U R' F u", FrontColour::Green, &["5x5x5", "EdgePairing"])
            .with_parameter("fc", EDGE_PAIRING_5_1_FC),
        AlgorithmRecord::front("5x5x5 Edge Pairing 2", 5, "u' R F' U R' F u", FrontColour::Green, &["5x5x5", "EdgePairing"])
            .with_parameter("fc", EDGE_PAIRING_5_2_FC),
        AlgorithmRecord::front("5x5x5 Edge Pairing 3", 5, "d R F' U R' F d'", FrontColour::Green, &["5x5x5", "EdgePairing"])
            .with_parameter("fc", EDGE_PAIRING_5_3_FC),
        AlgorithmRecord::front("5x5x5 Edge Pairing 4", 5, "d R F' U R' F d'", FrontColour::Green, &["5x5x5", "EdgePairing"])
            .with_parameter("fc", EDGE_PAIRING_5_4_FC),
        AlgorithmRecord::front("5x5x5 Edge Flipping", 5, "(R U R') (F R' F' R)", FrontColour::Red, &["5x5x5", "EdgePairing"])
            .with_parameter("fc", EDGE_FLIPPING_5_FC),
    ]
}

// `fc` 参数：每个面一段，依次为 U R F D L B
const EDGE_PAIRING_4_FC: &str = concat!(
    "ssssssssssssssss",
    "sssssssrsssrssss",
    "ssssssssssssssss",
    "ssssssssssssssss",
    "ssssssssssssssss",
    "ssssgddsgddsssss",
);

const PARITY_5_FC: &str = concat!(
    "ssssssdddssdddssdddssrrrs",
    "ssssssdddssdddssdddssssss",
    "sbbbssdddssdddssdddssssss",
    "ssssssdddssdddssdddssssss",
    "ssssssdddssdddssdddssssss",
    "ssssssdddssdddssdddssssss",
);

const EDGE_PAIRING_5_1_FC: &str = concat!(
    "sssssssssssssssssssssssss",
    "sssssssssrssssrssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssgdddsgdddssdddsssgs",
);

const EDGE_PAIRING_5_2_FC: &str = concat!(
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "ssssssssssossssosssssssss",
    "ssssssdddssdddgsdddgsssss",
);

const EDGE_PAIRING_5_3_FC: &str = concat!(
    "sssssssssssssssssssssssss",
    "ssssssssssssssrssssrsssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "ssssssdddsgdddsgdddsssss",
);

const EDGE_PAIRING_5_4_FC: &str = concat!(
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssossssossssssssssssss",
    "ssssssdddgsdddgsdddssssss",
);

const EDGE_FLIPPING_5_FC: &str = concat!(
    "sssssssssssssssssssssssss",
    "ssssssrrrrsrrrrsrrrrsssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssssssssssssssssssssss",
    "sssssgssssgssssgsssssssss",
);
