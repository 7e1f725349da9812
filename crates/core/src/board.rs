//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell holds a [`CellKind`].
//! Uses a flat vector, sized once at construction and never resized.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).

use crate::types::CellKind;

/// The game board, row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellKind>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Empty; width as usize * height as usize],
        }
    }

    /// Build a board from rows of numeric cell tags (top row first).
    ///
    /// Returns `None` if there are no rows, rows differ in length, or a tag
    /// is outside `0..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Board;
    ///
    /// let board = Board::from_tags(&[&[1, 0, 1], &[0, 0, 0]]).unwrap();
    /// assert_eq!((board.width(), board.height()), (3, 2));
    /// assert!(Board::from_tags(&[&[1, 0], &[0]]).is_none());
    /// ```
    pub fn from_tags(rows: &[&[u8]]) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|r| r.iter())
            .map(|&tag| CellKind::from_tag(tag))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            width: u16::try_from(width).ok()?,
            height: u16::try_from(rows.len()).ok()?,
            cells,
        })
    }

    /// Rows of numeric tags, top to bottom.
    pub fn to_tags(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.tag()).collect())
            .collect()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<CellKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: CellKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(kind) if !kind.is_empty())
    }

    /// One row of cells; empty slice past the bottom.
    pub fn row(&self, y: usize) -> &[CellKind] {
        if y >= self.height as usize {
            return &[];
        }
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let row = self.row(y);
        !row.is_empty() && row.iter().all(|cell| !cell.is_empty())
    }

    /// Remove every full row, pulling the rows above down and inserting
    /// empty rows at the top. Returns how many rows were removed.
    ///
    /// Two-pointer compaction from the bottom, in place.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(CellKind::Empty);
        write_y
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new(10, 20);

        board.set(0, 0, CellKind::I);
        board.set(5, 10, CellKind::T);

        assert_eq!(board.get(0, 0), Some(CellKind::I));
        assert_eq!(board.get(5, 10), Some(CellKind::T));

        assert_eq!(board.cells[0], CellKind::I);
        assert_eq!(board.cells[10 * 10 + 5], CellKind::T);
    }

    #[test]
    fn test_clear_returns_count_and_blanks_top() {
        let mut board = Board::from_tags(&[&[0, 1], &[2, 2], &[3, 3]]).unwrap();
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_tags(), vec![vec![0, 0], vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut board = Board::from_tags(&[&[0, 1], &[2, 0]]).unwrap();
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::from_tags(&[&[1, 1], &[2, 2]]).unwrap();
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.filled_count(), 0);
    }
}
