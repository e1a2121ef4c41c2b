//! Grid placement for catalog items.

/// Widest grid the catalog lays out.
pub const MAX_COLUMNS: u16 = 2;

/// Two columns on wide surfaces or when the caller asks for a 2-wide grid,
/// one otherwise.
pub fn column_count(wide: bool, forced_grid_size: u16) -> u16 {
    if wide || forced_grid_size == 2 {
        2
    } else {
        1
    }
}

/// Items are drawn with borders only in the two-column grid, where they
/// need visual grouping.
pub fn border_emphasis(columns: u16) -> bool {
    columns == 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub column: u16,
    pub span: u16,
}

impl GridCell {
    fn covers(&self, column: u16) -> bool {
        column >= self.column && column < self.column + self.span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

/// Place items left to right, wrapping to a new row when an item's span
/// does not fit in what is left of the current one. Spans wider than the
/// grid take the full row.
pub fn layout_grid(spans: &[u16], columns: u16) -> Vec<GridCell> {
    let columns = columns.max(1);
    let mut cells = Vec::with_capacity(spans.len());
    let mut row = 0;
    let mut column = 0;

    for (index, &span) in spans.iter().enumerate() {
        let span = span.clamp(1, columns);
        if column + span > columns {
            row += 1;
            column = 0;
        }
        cells.push(GridCell {
            index,
            row,
            column,
            span,
        });
        column += span;
        if column >= columns {
            row += 1;
            column = 0;
        }
    }
    cells
}

/// Index of the item focus lands on when moving from `from`.
///
/// Left/Right walk item order. Up/Down pick the item in the adjacent row
/// that covers the current item's first column, falling back to the last
/// item of that row.
pub fn neighbor(cells: &[GridCell], from: usize, direction: FocusMove) -> Option<usize> {
    let current = cells.get(from)?;
    match direction {
        FocusMove::Left => from.checked_sub(1),
        FocusMove::Right => (from + 1 < cells.len()).then_some(from + 1),
        FocusMove::Up => {
            let row = current.row.checked_sub(1)?;
            pick_in_row(cells, row, current.column)
        }
        FocusMove::Down => pick_in_row(cells, current.row + 1, current.column),
    }
}

fn pick_in_row(cells: &[GridCell], row: usize, column: u16) -> Option<usize> {
    let mut in_row = cells.iter().filter(|cell| cell.row == row).peekable();
    in_row.peek()?;
    let mut last = None;
    for cell in in_row {
        if cell.covers(column) {
            return Some(cell.index);
        }
        last = Some(cell.index);
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_columns_iff_wide_or_forced() {
        assert_eq!(column_count(false, 1), 1);
        assert_eq!(column_count(true, 1), 2);
        assert_eq!(column_count(false, 2), 2);
        assert_eq!(column_count(true, 2), 2);
        assert!(border_emphasis(2));
        assert!(!border_emphasis(1));
    }

    #[test]
    fn mixed_spans_wrap() {
        let cells = layout_grid(&[1, 2, 1, 1, 1], 2);
        let placed: Vec<_> = cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(placed, vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 0)]);
        assert_eq!(cells.last().map(|c| c.row), Some(3));
    }

    #[test]
    fn span_clamped_to_single_column() {
        let cells = layout_grid(&[2, 1], 1);
        assert_eq!(cells[0].span, 1);
        assert_eq!(cells[1].row, 1);
    }

    #[test]
    fn vertical_moves_follow_columns() {
        // row 0: [0][1]   row 1: [  2  ]   row 2: [3]
        let cells = layout_grid(&[1, 1, 2, 1], 2);
        assert_eq!(neighbor(&cells, 1, FocusMove::Down), Some(2));
        assert_eq!(neighbor(&cells, 2, FocusMove::Up), Some(0));
        assert_eq!(neighbor(&cells, 2, FocusMove::Down), Some(3));
        assert_eq!(neighbor(&cells, 3, FocusMove::Down), None);
        assert_eq!(neighbor(&cells, 0, FocusMove::Up), None);
        assert_eq!(neighbor(&cells, 0, FocusMove::Left), None);
        assert_eq!(neighbor(&cells, 3, FocusMove::Right), None);
    }
}
