mod maths_utils;
mod perf;

pub use maths_utils::remap;
pub(crate) use maths_utils::{is_flat, mean_and_sample_stddev, min_max, pearson};
