//! Views that draw a maze while it is being carved.
//!
//! Both views share one character layout: every cell is two characters wide with a
//! wall column between cells, and every row of cells has a wall row below it.
//!
//! ```text
//! +--+--+
//! |  |  |
//! +  +  +
//! |     |
//! +--+--+
//! ```

mod ascii;
mod terminal;

pub use ascii::AsciiView;
pub use terminal::TerminalView;

use mazecore::gameboard::Wall;

pub const CORNER: char = '+';
pub const VERTICAL: char = '|';
pub const HORIZONTAL: char = '-';

/// Width and height of the character frame for a maze of `dimension`
pub fn frame_size(dimension: usize) -> (usize, usize) {
    (3 * dimension + 1, 2 * dimension + 1)
}

/// Position of the first character of `wall` and the characters drawing it
pub fn wall_glyphs(wall: &Wall) -> (usize, usize, &'static str) {
    let origin = wall.origin();

    if wall.is_horizontal_neighbor() {
        (3 * origin.col + 3, 2 * origin.row + 1, "|")
    } else {
        (3 * origin.col + 1, 2 * origin.row + 2, "--")
    }
}

/// Every character of the outer border and every corner, as `(x, y, char)`
pub fn border_glyphs(dimension: usize) -> impl Iterator<Item = (usize, usize, char)> {
    let (width, height) = frame_size(dimension);

    (0..height).flat_map(move |y| {
        (0..width).filter_map(move |x| {
            let corner = y % 2 == 0 && x % 3 == 0;
            let top_or_bottom = y == 0 || y == height - 1;
            let side = x == 0 || x == width - 1;

            if corner {
                Some((x, y, CORNER))
            } else if top_or_bottom {
                Some((x, y, HORIZONTAL))
            } else if side {
                Some((x, y, VERTICAL))
            } else {
                None
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use mazecore::gameboard::Cell;

    use super::*;

    #[test]
    fn glyph_positions() {
        assert_eq!(frame_size(2), (7, 5));
        assert_eq!(wall_glyphs(&Wall::right_of(Cell::new(0, 0))), (3, 1, "|"));
        assert_eq!(wall_glyphs(&Wall::below(Cell::new(0, 1))), (4, 2, "--"));
        assert_eq!(wall_glyphs(&Wall::right_of(Cell::new(1, 0))), (3, 3, "|"));
    }

    #[test]
    fn border_of_single_cell() {
        let glyphs: Vec<_> = border_glyphs(1).collect();
        assert_eq!(glyphs.len(), 10);
        assert!(glyphs.contains(&(0, 0, CORNER)));
        assert!(glyphs.contains(&(3, 2, CORNER)));
        assert!(glyphs.contains(&(1, 0, HORIZONTAL)));
        assert!(glyphs.contains(&(0, 1, VERTICAL)));
        assert!(!glyphs.iter().any(|&(x, y, _)| (x, y) == (1, 1)));
    }
}
