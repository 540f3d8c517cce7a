//! 打印卡片 LaTeX 文档写入服务 - 业务能力层
//!
//! 奇数页放图标（卡片正面），偶数页放公式（卡片背面，每行左右镜像）

use crate::error::{AppError, AppResult};
use crate::models::AlgorithmRecord;
use crate::services::icon_paths::IconPaths;
use crate::services::layout::{paginate, Cell, PageLayout};
use crate::services::notation::{escape_latex, to_latex};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PAGE_BREAK: &str = "\n\\newpage\n\n";

/// LaTeX 文档写入服务
pub struct LatexWriter {
    path: PathBuf,
    columns: usize,
    rows: usize,
}

impl LatexWriter {
    /// 创建新的写入服务
    ///
    /// # 参数
    /// - `path`: 输出文件路径
    /// - `columns`: 每页列数
    /// - `rows`: 每页行数
    pub fn new(path: impl Into<PathBuf>, columns: usize, rows: usize) -> Self {
        Self {
            path: path.into(),
            columns,
            rows,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 生成并写入文档
    ///
    /// # 返回
    /// 返回页面（正反面一对算一页）数量
    pub fn write(&self, records: &[AlgorithmRecord], icons: &IconPaths) -> AppResult<usize> {
        let pages = paginate(records.len(), self.columns, self.rows);
        let document = self.render_pages(records, icons, &pages);

        std::fs::write(&self.path, document).map_err(|e| AppError::write_failed(&self.path, e))?;

        info!(
            "✓ 已生成打印卡片: {} ({} 张卡片, {} 页)",
            self.path.display(),
            records.len(),
            pages.len()
        );
        Ok(pages.len())
    }

    /// 生成完整文档文本
    pub fn render(&self, records: &[AlgorithmRecord], icons: &IconPaths) -> String {
        let pages = paginate(records.len(), self.columns, self.rows);
        self.render_pages(records, icons, &pages)
    }

    fn render_pages(
        &self,
        records: &[AlgorithmRecord],
        icons: &IconPaths,
        pages: &[PageLayout],
    ) -> String {
        let mut out = preamble(self.rows);

        for (page_index, page) in pages.iter().enumerate() {
            debug!("排版第 {} 页: {} 张卡片", page_index + 1, page.card_count());

            out.push_str("% Icons page\n");
            self.push_table(&mut out, records, &page.front, |record| {
                format!("\\cubeimg{{{}}}", icons.file_name(record))
            });
            out.push_str(PAGE_BREAK);

            out.push_str("% Algorithms page (reversed)\n");
            self.push_table(&mut out, records, &page.back, |record| {
                format!(
                    "\\cubealgo{{{}}}{{{}}}",
                    escape_latex(&record.name),
                    to_latex(record.human_algorithm())
                )
            });

            if page_index + 1 < pages.len() {
                out.push_str(PAGE_BREAK);
            }
        }

        out.push_str("\n\\end{document}\n");
        out
    }

    fn push_table<F>(
        &self,
        out: &mut String,
        records: &[AlgorithmRecord],
        grid: &[Vec<Cell>],
        cell: F,
    ) where
        F: Fn(&AlgorithmRecord) -> String,
    {
        out.push_str("\\begin{center}\n");
        let _ = writeln!(out, "\\begin{{tabular}}{{|{}}}", "p{\\cellwidth}|".repeat(self.columns));
        out.push_str("\\hline\n");

        for row in grid {
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.and_then(|i| records.get(i)).map(&cell).unwrap_or_default())
                .collect();
            let _ = writeln!(out, "{} \\\\", cells.join(" & "));
            out.push_str("\\hline\n");
        }

        out.push_str("\\end{tabular}\n");
        out.push_str("\\end{center}\n");
    }
}

/// 文档前言：页面尺寸、格子尺寸（由每页行数决定）和两个格子宏
fn preamble(rows: usize) -> String {
    let cell_height = 1.0 / rows.max(1) as f64;
    format!(
        r"\documentclass[12pt,a4paper,landscape]{{scrartcl}}
\usepackage{{amsmath}}
\usepackage[T1]{{fontenc}}
\usepackage{{fontspec}}
\usepackage[margin=0.5cm]{{geometry}}
\usepackage{{graphicx}}
\usepackage{{lmodern}}

\title{{Speedcubing Lernkarten}}
\author{{Generated from algorithm database}}
\date{{\today}}

\newlength{{\cellheight}}
\setlength{{\cellheight}}{{{cell_height:.3}\textheight}}
\newlength{{\cellwidth}}
\setlength{{\cellwidth}}{{\cellheight}}

\newcommand{{\cubeimg}}[1]{{
    \begin{{minipage}}[t][\cellheight][c]{{\cellwidth}}
        \begin{{center}}
            \includegraphics[width=\cellwidth, height=\cellheight, keepaspectratio]{{#1}}
        \end{{center}}
    \end{{minipage}}
}}

\newcommand{{\cubealgo}}[2]{{
    \begin{{minipage}}[t][\cellheight][c]{{\cellwidth}}
        \begin{{center}}
            \footnotesize
            \textbf{{#1}}\\[0.5em]
            \texttt{{#2}}
        \end{{center}}
    \end{{minipage}}
}}

\begin{{document}}
"
    )
}
