use crate::collections::{FxIndexMap, FxIndexSet};
use crate::geometry::GridLocation;
use super::{Graph, WeightedGraph};


/// E W N S
const DEFAULT_NEIGHBORHOOD: [GridLocation; 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];


/// Implicit graph over the cells of a `width` x `height` grid
/// - blocked cells are never reported as nodes or neighbors
/// - moving into a cell costs its weight, 1 unless set otherwise
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: i32,
    height: i32,
    walls: FxIndexSet<GridLocation>,
    weights: FxIndexMap<GridLocation, u32>,
    neighborhood: Option<Vec<GridLocation>>,
}

impl GridGraph {

    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: FxIndexSet::default(),
            weights: FxIndexMap::default(),
            neighborhood: None,
        }
    }

    /// Replace the default 4-connected pattern with custom offsets
    /// Custom offsets are used in the given order, without parity reversal
    pub fn with_neighborhood(mut self, offsets: Vec<GridLocation>) -> Self {
        self.neighborhood = Some(offsets);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, location: &GridLocation) -> bool {
        let &(x, y) = location;
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    pub fn passable(&self, location: &GridLocation) -> bool {
        !self.walls.contains(location)
    }

    /// Mark a cell as impassable
    pub fn block(&mut self, location: GridLocation) {
        self.walls.insert(location);
    }

    /// Set the cost of entering a cell
    pub fn set_weight(&mut self, location: GridLocation, weight: u32) {
        self.weights.insert(location, weight);
    }

    fn offsets(&self, location: &GridLocation) -> Vec<GridLocation> {
        match &self.neighborhood {
            Some(offsets) => offsets.clone(),
            None => {
                let mut offsets = DEFAULT_NEIGHBORHOOD.to_vec();
                // alternate order on checkerboard parity, gives straighter paths on ties
                if (location.0 + location.1).rem_euclid(2) == 0 {
                    offsets.reverse();
                }
                offsets
            }
        }
    }
}

impl Graph for GridGraph {
    type Node = GridLocation;

    /// Passable cells in row-major order
    fn nodes(&self) -> Vec<GridLocation> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|location| self.passable(location))
            .collect()
    }

    fn neighbors(&self, location: &GridLocation) -> Vec<GridLocation> {
        let &(x, y) = location;
        self.offsets(location)
            .into_iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|next| self.in_bounds(next) && self.passable(next))
            .collect()
    }
}

impl WeightedGraph for GridGraph {
    type Cost = u32;

    fn cost(&self, _from: &GridLocation, to: &GridLocation) -> u32 {
        self.weights.get(to).copied().unwrap_or(1)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = GridGraph::new(3, 3);

        let mut corner = grid.neighbors(&(0, 0));
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        assert_eq!(grid.neighbors(&(1, 1)).len(), 4);
    }

    #[test]
    fn test_neighbor_order_alternates_with_parity() {
        let grid = GridGraph::new(5, 5);

        // odd parity - E W N S
        assert_eq!(grid.neighbors(&(2, 1)), vec![(3, 1), (1, 1), (2, 0), (2, 2)]);
        // even parity - S N W E
        assert_eq!(grid.neighbors(&(2, 2)), vec![(2, 3), (2, 1), (1, 2), (3, 2)]);
    }

    #[test]
    fn test_walls_are_filtered() {
        let mut grid = GridGraph::new(3, 3);
        grid.block((1, 0));
        grid.block((0, 1));

        assert!(grid.neighbors(&(0, 0)).is_empty());
        assert!(!grid.passable(&(1, 0)));
        assert_eq!(grid.nodes().len(), 7);
        assert!(!grid.nodes().contains(&(0, 1)));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = GridGraph::new(4, 2);
        assert!(grid.in_bounds(&(3, 1)));
        assert!(!grid.in_bounds(&(4, 1)));
        assert!(!grid.in_bounds(&(0, -1)));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_weights_default_to_one() {
        let mut grid = GridGraph::new(3, 1);
        grid.set_weight((2, 0), 5);

        assert_eq!(grid.cost(&(0, 0), &(1, 0)), 1);
        assert_eq!(grid.cost(&(1, 0), &(2, 0)), 5);
    }

    #[test]
    fn test_custom_neighborhood() {
        let grid = GridGraph::new(3, 3).with_neighborhood(vec![
            (-1, -1), (0, -1), (1, -1),
            (-1, 0), (1, 0),
            (-1, 1), (0, 1), (1, 1),
        ]);

        assert_eq!(grid.neighbors(&(1, 1)).len(), 8);
        assert_eq!(grid.neighbors(&(0, 0)), vec![(1, 0), (0, 1), (1, 1)]);
    }
}
