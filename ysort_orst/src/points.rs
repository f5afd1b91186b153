//! The integer point record used by the point benchmark.

use rand::Rng;

use crate::orst::Keyed;

/// A point on an integer grid. Ordered by `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Keyed for Point {
    type Key = i32;

    #[inline]
    fn key(&self) -> i32 {
        self.y
    }
}

/// Largest `n` the generators accept. Coordinates are `i32` and go up to `n`.
pub const MAX_POINTS: usize = i32::MAX as usize;

/// `n` points with `x = i` and `y = n - i`.
///
/// The keys run from `n` down to `1`, which is already in descending order and the worst case for
/// an ascending selection sort.
///
/// # Panics
///
/// If `n` is above [`MAX_POINTS`].
///
/// ```
/// use ysort_orst::points::{reversed, Point};
///
/// assert_eq!(reversed(3), [Point::new(0, 3), Point::new(1, 2), Point::new(2, 1)]);
/// ```
pub fn reversed(n: usize) -> Vec<Point> {
    assert!(n <= MAX_POINTS, "{n} points do not fit i32 coordinates");
    let n = n as i32;
    (0..n).map(|i| Point::new(i, n - i)).collect()
}

/// `n` points with both coordinates drawn uniformly from `0..=n`.
///
/// # Panics
///
/// If `n` is above [`MAX_POINTS`].
pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    assert!(n <= MAX_POINTS, "{n} points do not fit i32 coordinates");
    let limit = n as i32;
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..=limit), rng.gen_range(0..=limit)))
        .collect()
}
