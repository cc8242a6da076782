//! Spatial grid index: buckets instances into cells of side `d_min`.

use crate::instance::{Instance, InstanceIdx};

/// A row-major 2-D grid over the bounding box of a set of instances.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_side: f64,
    min_x: f64,
    min_y: f64,
    cells: Vec<Vec<InstanceIdx>>,
}

impl Grid {
    /// Builds a grid of cell side `d_min` covering every instance's
    /// bounding box. Empty input produces a degenerate 1x1 empty grid.
    pub fn build(instances: &[Instance], d_min: f64) -> Self {
        debug_assert!(d_min > 0.0, "neighbor distance must be positive");

        if instances.is_empty() {
            return Grid {
                width: 1,
                height: 1,
                cell_side: d_min,
                min_x: 0.0,
                min_y: 0.0,
                cells: vec![Vec::new()],
            };
        }

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for inst in instances {
            min_x = min_x.min(inst.x);
            max_x = max_x.max(inst.x);
            min_y = min_y.min(inst.y);
            max_y = max_y.max(inst.y);
        }

        let width = (((max_x - min_x) / d_min).ceil() as usize).max(1);
        let height = (((max_y - min_y) / d_min).ceil() as usize).max(1);

        let mut cells = vec![Vec::new(); width * height];
        for (idx, inst) in instances.iter().enumerate() {
            let (gx, gy) = Self::cell_coords(inst.x, inst.y, min_x, min_y, d_min, width, height);
            cells[gy * width + gx].push(idx);
        }

        Grid {
            width,
            height,
            cell_side: d_min,
            min_x,
            min_y,
            cells,
        }
    }

    fn cell_coords(
        x: f64,
        y: f64,
        min_x: f64,
        min_y: f64,
        d_min: f64,
        width: usize,
        height: usize,
    ) -> (usize, usize) {
        let gx = (((x - min_x) / d_min) as usize).min(width - 1);
        let gy = (((y - min_y) / d_min) as usize).min(height - 1);
        (gx, gy)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_side(&self) -> f64 {
        self.cell_side
    }

    /// Instances in cell `(gx, gy)`.
    pub fn cell(&self, gx: usize, gy: usize) -> &[InstanceIdx] {
        &self.cells[gy * self.width + gx]
    }

    /// The cell `(gx, gy)` together with the up to eight cells surrounding
    /// it, clipped to the grid bounds.
    pub fn neighbor_cells(&self, gx: usize, gy: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        let height = self.height;
        (-1i64..=1).flat_map(move |dy| {
            (-1i64..=1).filter_map(move |dx| {
                let nx = gx as i64 + dx;
                let ny = gy as i64 + dy;
                if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                    Some((nx as usize, ny as usize))
                } else {
                    None
                }
            })
        })
    }

    /// Iterates `(gx, gy)` for every non-empty cell in row-major order.
    pub fn cell_coords_iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |linear| (linear % width, linear / width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_grid() {
        let grid = Grid::build(&[], 2.0);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert!(grid.cell(0, 0).is_empty());
    }

    #[test]
    fn places_each_instance_in_exactly_one_cell() {
        let instances = vec![
            Instance::new("A", "A1", 0.0, 0.0),
            Instance::new("B", "B1", 5.0, 5.0),
        ];
        let grid = Grid::build(&instances, 2.0);
        let total: usize = grid.cell_coords_iter().map(|(x, y)| grid.cell(x, y).len()).sum();
        assert_eq!(total, instances.len());
    }

    #[test]
    fn max_coordinate_clamps_to_last_cell() {
        let instances = vec![
            Instance::new("A", "A1", 0.0, 0.0),
            Instance::new("B", "B1", 4.0, 4.0),
        ];
        let grid = Grid::build(&instances, 2.0);
        assert!(grid.cell(grid.width() - 1, grid.height() - 1).contains(&1));
    }
}
