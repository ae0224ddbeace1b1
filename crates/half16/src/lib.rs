mod convert;
pub mod half;

pub use half::Half;
