//! Near-square grid layout and pointer-to-cell mapping.
//!
//! Lays a flat bit sequence out as a grid of `columns = ceil(sqrt(n))` by
//! `rows = ceil(n / columns)` cells, which always yields at least `n` slots.
//! When `columns * rows > n` the last row is ragged: the trailing slots are
//! never painted and the canvas background shows through.

use eframe::egui::{pos2, vec2, Pos2, Rect};

/// Layout of a bit sequence on a fixed-size canvas.
///
/// Derived state: recomputed from (bit count, canvas size) whenever either
/// changes, never stored across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Number of bits being laid out.
    pub bit_count: usize,
    /// Grid columns, `ceil(sqrt(bit_count))`; 0 when there are no bits.
    pub columns: usize,
    /// Grid rows, `ceil(bit_count / columns)`; 0 when there are no bits.
    pub rows: usize,
    /// Cell width in pixels.
    pub cell_width: f32,
    /// Cell height in pixels.
    pub cell_height: f32,
}

impl GridGeometry {
    /// Compute the grid for `bit_count` bits on a `width` x `height` canvas.
    pub fn layout(bit_count: usize, width: f32, height: f32) -> Self {
        if bit_count == 0 {
            return Self {
                bit_count: 0,
                columns: 0,
                rows: 0,
                cell_width: 0.0,
                cell_height: 0.0,
            };
        }

        let columns = (bit_count as f64).sqrt().ceil() as usize;
        let rows = (bit_count + columns - 1) / columns;

        Self {
            bit_count,
            columns,
            rows,
            cell_width: width / columns as f32,
            cell_height: height / rows as f32,
        }
    }

    /// Total cell slots, including the unpainted tail of a ragged last row.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Rectangle of cell `index` in canvas-local coordinates.
    ///
    /// Only meaningful for `index < cell_count()`.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        Rect::from_min_size(
            pos2(col as f32 * self.cell_width, row as f32 * self.cell_height),
            vec2(self.cell_width, self.cell_height),
        )
    }

    /// Map a pointer position in canvas-local coordinates to a bit index.
    ///
    /// Inverse of [`cell_rect`](Self::cell_rect): `col = floor(x / cell_width)`,
    /// `row = floor(y / cell_height)`, `index = row * columns + col`. Anything
    /// outside `[0, bit_count)` maps to `None`, including every position on a
    /// zero-bit grid and the unpainted tail of a ragged last row.
    pub fn index_at(&self, pos: Pos2) -> Option<usize> {
        if self.bit_count == 0 {
            return None;
        }

        let col = (pos.x / self.cell_width).floor() as i64;
        let row = (pos.y / self.cell_height).floor() as i64;
        let index = row * self.columns as i64 + col;

        if (0..self.bit_count as i64).contains(&index) {
            Some(index as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_examples() {
        // 4 bits fill an exact 2x2 square.
        let grid = GridGeometry::layout(4, 500.0, 500.0);
        assert_eq!((grid.columns, grid.rows), (2, 2));
        assert_eq!(grid.cell_count(), 4);

        // 5 bits leave one ragged slot: 3 columns, 2 rows, 6 slots.
        let grid = GridGeometry::layout(5, 500.0, 500.0);
        assert_eq!((grid.columns, grid.rows), (3, 2));
        assert_eq!(grid.cell_count(), 6);
    }

    #[test]
    fn single_bit_fills_the_whole_canvas() {
        let grid = GridGeometry::layout(1, 1.0, 1.0);
        assert_eq!((grid.columns, grid.rows), (1, 1));
        assert_eq!(
            grid.cell_rect(0),
            Rect::from_min_size(pos2(0.0, 0.0), vec2(1.0, 1.0))
        );
        assert_eq!(grid.index_at(pos2(0.5, 0.5)), Some(0));
    }

    #[test]
    fn empty_layout_has_no_cells_and_no_hover() {
        let grid = GridGeometry::layout(0, 500.0, 500.0);
        assert_eq!((grid.columns, grid.rows), (0, 0));
        assert_eq!(grid.cell_count(), 0);
        assert_eq!(grid.index_at(pos2(250.0, 250.0)), None);
    }

    #[test]
    fn grid_always_holds_all_bits() {
        for n in 1..=1000 {
            let grid = GridGeometry::layout(n, 500.0, 500.0);
            assert!(
                grid.cell_count() >= n,
                "grid {}x{} too small for {n} bits",
                grid.columns,
                grid.rows
            );
            // columns is the true ceiling of sqrt(n).
            assert!((grid.columns - 1) * (grid.columns - 1) < n);
            assert!(grid.columns * grid.columns >= n);
            // rows is minimal for that column count.
            assert!(grid.columns * (grid.rows - 1) < n);
        }
    }

    #[test]
    fn pointer_mapping_inverts_cell_placement() {
        for n in [1, 2, 4, 5, 12, 37, 100] {
            let grid = GridGeometry::layout(n, 500.0, 400.0);
            for index in 0..n {
                let center = grid.cell_rect(index).center();
                assert_eq!(grid.index_at(center), Some(index), "n={n} index={index}");
            }
            // Ragged slots past the last bit are not hoverable.
            for index in n..grid.cell_count() {
                let center = grid.cell_rect(index).center();
                assert_eq!(grid.index_at(center), None, "n={n} ragged index={index}");
            }
        }
    }

    #[test]
    fn out_of_range_pointer_is_no_hover() {
        let grid = GridGeometry::layout(4, 100.0, 100.0);
        assert_eq!(grid.index_at(pos2(-10.0, 5.0)), None);
        assert_eq!(grid.index_at(pos2(5.0, -10.0)), None);
        assert_eq!(grid.index_at(pos2(5.0, 250.0)), None);
    }

    #[test]
    fn resizing_changes_cells_not_shape() {
        let small = GridGeometry::layout(37, 100.0, 100.0);
        let large = GridGeometry::layout(37, 3000.0, 1.0);
        assert_eq!((small.columns, small.rows), (large.columns, large.rows));
        assert_ne!(small.cell_width, large.cell_width);
        assert_ne!(small.cell_height, large.cell_height);
    }
}
