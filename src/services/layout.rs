//! 卡片排版计算 - 业务能力层
//!
//! 把 N 张卡片分配到固定网格的页面上。
//! 正面按行优先从左到右排列；背面每一行左右镜像，
//! 这样双面打印、沿边对齐裁切后，每张卡片的图标和公式正好背靠背。
//! 最后一页不满时，行数缩减为 `ceil(剩余数量 / 列数)`，正反面一致。

/// 一页中的一个格子：`Some(i)` 表示第 i 张卡片（全局下标），`None` 表示空格
pub type Cell = Option<usize>;

/// 一页的正反面布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// 正面（图标），按行存放
    pub front: Vec<Vec<Cell>>,
    /// 背面（公式），每行相对正面镜像
    pub back: Vec<Vec<Cell>>,
}

impl PageLayout {
    /// 本页行数
    pub fn rows(&self) -> usize {
        self.front.len()
    }

    /// 本页卡片数量
    pub fn card_count(&self) -> usize {
        self.front.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// 计算所有页面的布局
///
/// # 参数
/// - `count`: 卡片总数
/// - `columns`: 每行列数
/// - `rows`: 每页行数
///
/// # 返回
/// 按顺序返回每一页；`count` 为 0 或网格为空时返回空列表
pub fn paginate(count: usize, columns: usize, rows: usize) -> Vec<PageLayout> {
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let per_page = columns * rows;
    (0..count)
        .step_by(per_page)
        .map(|page_start| {
            let on_page = (count - page_start).min(per_page);
            let page_rows = on_page.div_ceil(columns);

            let front: Vec<Vec<Cell>> = (0..page_rows)
                .map(|row| {
                    (0..columns)
                        .map(|col| {
                            let offset = row * columns + col;
                            (offset < on_page).then_some(page_start + offset)
                        })
                        .collect()
                })
                .collect();
            let back = front.iter().map(|row| mirror_row(row)).collect();

            PageLayout { front, back }
        })
        .collect()
}

/// 镜像一行：`[A, B, C]` 变成 `[C, B, A]`
pub fn mirror_row<T: Clone>(row: &[T]) -> Vec<T> {
    row.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_row() {
        assert_eq!(mirror_row(&["A", "B", "C"]), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_ten_cards_on_three_by_three() {
        let pages = paginate(10, 3, 3);
        assert_eq!(pages.len(), 2);

        assert_eq!(pages[0].card_count(), 9);
        assert_eq!(pages[0].rows(), 3);

        assert_eq!(pages[1].card_count(), 1);
        assert_eq!(pages[1].rows(), 1);
        assert_eq!(pages[1].front, vec![vec![Some(9), None, None]]);
        assert_eq!(pages[1].back, vec![vec![None, None, Some(9)]]);
    }

    #[test]
    fn test_back_rows_are_mirrored() {
        let pages = paginate(9, 3, 3);
        assert_eq!(pages[0].front[0], vec![Some(0), Some(1), Some(2)]);
        assert_eq!(pages[0].back[0], vec![Some(2), Some(1), Some(0)]);
        assert_eq!(pages[0].back[2], vec![Some(8), Some(7), Some(6)]);
    }

    #[test]
    fn test_partial_row_on_last_page() {
        let pages = paginate(14, 4, 2);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].rows(), 2);
        assert_eq!(pages[1].front[1], vec![Some(12), Some(13), None, None]);
        assert_eq!(pages[1].back[1], vec![None, None, Some(13), Some(12)]);
    }

    #[test]
    fn test_every_card_placed_once() {
        let pages = paginate(57, 3, 3);
        assert_eq!(pages.len(), 7);
        assert_eq!(pages[6].card_count(), 3);
        assert_eq!(pages[6].rows(), 1);

        let mut placed: Vec<usize> = pages
            .iter()
            .flat_map(|p| p.back.iter().flatten().flatten().copied())
            .collect();
        placed.sort_unstable();
        assert_eq!(placed, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(paginate(0, 3, 3).is_empty());
        assert!(paginate(5, 0, 3).is_empty());
    }
}
