//! 公式记号转换 - 业务能力层
//!
//! 把魔方公式转换成 LaTeX 排版片段：次数写成上标，逆时针写成撇号

use regex::Regex;
use std::sync::OnceLock;

/// 单个转动：可选前缀层数、一个字母、可选 w、可选次数、可选撇号
const MOVE_PATTERN: &str = r"\d*[a-zA-Z]w?\d*'*";
const MOVE_PARTS: &str = r"^(\d*)([a-zA-Z]w?)(\d*)('*)$";

fn move_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOVE_PATTERN).expect("转动模式必须合法"))
}

fn parts_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOVE_PARTS).expect("转动模式必须合法"))
}

/// 把公式转换成 LaTeX 记号
///
/// 例如 `R U R' U2` 变成 `R U $\text{R}'$ $\text{U}^{2}$`。
/// 相邻的转动拆成独立片段；无法识别的字符经转义后粘在相邻片段上，不会报错。
pub fn to_latex(alg: &str) -> String {
    let cleaned: String = alg.chars().filter(|c| !matches!(c, '(' | ')')).collect();

    let mut tokens = Vec::new();
    for chunk in cleaned.split_whitespace() {
        let mut current = String::new();
        let mut last = 0;
        for m in move_regex().find_iter(chunk) {
            let glued = m.start() > last;
            if glued {
                current.push_str(&escape_latex(&chunk[last..m.start()]));
            }
            if !current.is_empty() && !glued {
                tokens.push(std::mem::take(&mut current));
            }
            current.push_str(&format_move(m.as_str()));
            last = m.end();
        }
        current.push_str(&escape_latex(&chunk[last..]));
        if !current.is_empty() {
            tokens.push(current);
        }
    }

    tokens.join(" ")
}

fn format_move(mv: &str) -> String {
    let Some(caps) = parts_regex().captures(mv) else {
        return mv.to_string();
    };
    let prefix = &caps[1];
    let base = &caps[2];
    let suffix = &caps[3];
    let primes = caps[4].len();

    if prefix.is_empty() && suffix.is_empty() && primes == 0 {
        return base.to_string();
    }

    let mut out = format!("$\\text{{{}{}}}", prefix, base);
    if !suffix.is_empty() {
        out.push_str(&format!("^{{{}}}", suffix));
    }
    match primes {
        0 => {}
        1 => out.push('\''),
        n => out.push_str(&format!("^{{{}\\prime}}", n)),
    }
    out.push('$');
    out
}

/// 转义 LaTeX 特殊字符
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}
