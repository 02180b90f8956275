use num_traits::{Num, Signed};


/// Integer cell coordinate on a grid - (x, y)
pub type GridLocation = (i32, i32);


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// A* heuristic for 4-connected grids
/// Admissible as long as no cell costs less than 1 to enter
pub fn grid_heuristic(a: &GridLocation, b: &GridLocation) -> u32 {
    manhattan_distance(a.0, a.1, b.0, b.1).unsigned_abs()
}
