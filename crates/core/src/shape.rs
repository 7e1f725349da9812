//! Piece shapes - small immutable cell matrices
//!
//! A shape is one orientation of a piece: a row-major matrix of at most 4x4
//! cells. Rotation never mutates a shape; it builds a new one.
//! Coordinates: (x, y) where x is the column and y is the row, both from the
//! top-left corner of the matrix.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{CellKind, MAX_SHAPE_SIDE};

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Why a tag matrix could not become a [`PieceShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no columns.
    Empty,
    /// Row `row` has a different length than row 0.
    Ragged { row: usize },
    /// More than 4 rows or columns.
    TooLarge { width: usize, height: usize },
    /// A tag outside `0..=7`.
    UnknownTag(u8),
    /// Every cell is empty.
    Blank,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no cells"),
            ShapeError::Ragged { row } => write!(f, "shape row {row} has a different width"),
            ShapeError::TooLarge { width, height } => write!(
                f,
                "shape is {width}x{height}, larger than {MAX_SHAPE_SIDE}x{MAX_SHAPE_SIDE}"
            ),
            ShapeError::UnknownTag(tag) => write!(f, "unknown cell tag {tag}"),
            ShapeError::Blank => write!(f, "shape has no occupied cell"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// One orientation of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceShape {
    width: u8,
    height: u8,
    /// Row-major (y * width + x)
    cells: ArrayVec<CellKind, MAX_SHAPE_CELLS>,
}

impl PieceShape {
    /// Build a shape from rows of numeric cell tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::PieceShape;
    ///
    /// let t = PieceShape::from_tags(&[&[0, 7, 0], &[7, 7, 7]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(PieceShape::from_tags(&[&[1, 1], &[1]]).is_err());
    /// ```
    pub fn from_tags(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(ShapeError::Ragged { row });
        }
        if width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge { width, height });
        }

        let mut cells = ArrayVec::new();
        for &tag in rows.iter().flat_map(|r| r.iter()) {
            cells.push(CellKind::from_tag(tag).ok_or(ShapeError::UnknownTag(tag))?);
        }
        if cells.iter().all(|c| c.is_empty()) {
            return Err(ShapeError::Blank);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Spawn orientation of one of the seven pieces; `None` for `Empty`.
    pub fn canonical(kind: CellKind) -> Option<Self> {
        let rows: &[&[u8]] = match kind {
            CellKind::Empty => return None,
            CellKind::I => &[&[1, 1, 1, 1]],
            CellKind::J => &[&[2, 0, 0], &[2, 2, 2]],
            CellKind::L => &[&[0, 0, 3], &[3, 3, 3]],
            CellKind::O => &[&[4, 4], &[4, 4]],
            CellKind::S => &[&[0, 5, 5], &[5, 5, 0]],
            CellKind::Z => &[&[6, 6, 0], &[0, 6, 6]],
            CellKind::T => &[&[0, 7, 0], &[7, 7, 7]],
        };
        Self::from_tags(rows).ok()
    }

    /// All seven spawn shapes, in tag order (I, J, L, O, S, Z, T).
    pub fn canonical_set() -> Vec<Self> {
        crate::types::PIECE_KINDS
            .iter()
            .filter_map(|&kind| Self::canonical(kind))
            .collect()
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at column `x`, row `y`; `Empty` outside the matrix.
    pub fn get(&self, x: u8, y: u8) -> CellKind {
        if x >= self.width || y >= self.height {
            return CellKind::Empty;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Occupied cells as `(dx, dy, kind)` offsets from the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i16, i16, CellKind)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| !kind.is_empty())
            .map(move |(i, &kind)| ((i % width) as i16, (i / width) as i16, kind))
    }

    /// The kind of the first occupied cell.
    pub fn kind(&self) -> CellKind {
        self.occupied()
            .next()
            .map_or(CellKind::Empty, |(_, _, kind)| kind)
    }

    /// Quarter turn: `new[x][y] = old[y][width - 1 - x]`.
    ///
    /// The result has the old height as width and the old width as height.
    pub fn rotated(&self) -> Self {
        let old_w = self.width;
        let old_h = self.height;
        let mut cells = ArrayVec::new();
        for x in 0..old_w {
            for y in 0..old_h {
                cells.push(self.get(old_w - 1 - x, y));
            }
        }
        Self {
            width: old_h,
            height: old_w,
            cells,
        }
    }

    /// Rows of numeric tags, top to bottom.
    pub fn to_tags(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.tag()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_set_has_seven_distinct_kinds() {
        let set = PieceShape::canonical_set();
        assert_eq!(set.len(), 7);
        let kinds: Vec<_> = set.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, crate::types::PIECE_KINDS.to_vec());
        assert!(set.iter().all(|s| s.occupied().count() == 4));
    }

    #[test]
    fn test_canonical_empty_is_none() {
        assert_eq!(PieceShape::canonical(CellKind::Empty), None);
    }

    #[test]
    fn test_rotated_t_matches_formula() {
        let t = PieceShape::canonical(CellKind::T).unwrap();
        let r = t.rotated();
        assert_eq!(r.to_tags(), vec![vec![0, 7], vec![7, 7], vec![0, 7]]);
    }

    #[test]
    fn test_rotated_i_becomes_vertical() {
        let i = PieceShape::canonical(CellKind::I).unwrap();
        let r = i.rotated();
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!(r.rotated(), i);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for shape in PieceShape::canonical_set() {
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn test_rotation_does_not_touch_original() {
        let l = PieceShape::canonical(CellKind::L).unwrap();
        let before = l.to_tags();
        let _ = l.rotated();
        assert_eq!(l.to_tags(), before);
    }

    #[test]
    fn test_from_tags_errors() {
        assert_eq!(PieceShape::from_tags(&[]), Err(ShapeError::Empty));
        assert_eq!(PieceShape::from_tags(&[&[]]), Err(ShapeError::Empty));
        assert_eq!(
            PieceShape::from_tags(&[&[1, 1], &[1]]),
            Err(ShapeError::Ragged { row: 1 })
        );
        assert_eq!(
            PieceShape::from_tags(&[&[1, 1, 1, 1, 1]]),
            Err(ShapeError::TooLarge {
                width: 5,
                height: 1
            })
        );
        assert_eq!(
            PieceShape::from_tags(&[&[9]]),
            Err(ShapeError::UnknownTag(9))
        );
        assert_eq!(PieceShape::from_tags(&[&[0, 0]]), Err(ShapeError::Blank));
    }

    #[test]
    fn test_occupied_offsets() {
        let s = PieceShape::canonical(CellKind::S).unwrap();
        let cells: Vec<_> = s.occupied().collect();
        assert_eq!(
            cells,
            vec![
                (1, 0, CellKind::S),
                (2, 0, CellKind::S),
                (0, 1, CellKind::S),
                (1, 1, CellKind::S),
            ]
        );
    }
}
