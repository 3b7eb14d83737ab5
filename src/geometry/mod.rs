use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}
