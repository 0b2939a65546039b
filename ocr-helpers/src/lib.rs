use num_traits::AsPrimitive;

use std::fmt::Debug;

// Include submodules
mod common;
mod distance;

// Re-export types from submodules
pub use common::Observation;
pub use distance::{Distance, DistanceError, EuclideanDist, HammingDist, ManhattanDist};

/// Element type of a feature vector.
///
/// Features are integer measurements (pixel intensities for the digit data).
/// Every implementor widens to `i128` without loss, so the difference of two
/// features is always exact, even for `i64` values beyond 2^53.
pub trait Feature: Copy + Debug + PartialEq + Send + Sync + AsPrimitive<i128> + 'static {
    fn to_i128(self) -> i128 {
        self.as_()
    }
}

impl Feature for i8 {}
impl Feature for i16 {}
impl Feature for i32 {}
impl Feature for i64 {}
impl Feature for u8 {}
impl Feature for u16 {}
impl Feature for u32 {}
