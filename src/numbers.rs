/*
    Fuzzy number variants
*/

mod addition;
mod any;
mod general;
mod ops;
mod trapezoidal;
mod triangular;

pub use any::*;
pub use general::*;
pub use trapezoidal::*;
pub use triangular::*;

pub(crate) use ops::{add_scalar_or_panic, mul_scalar_or_panic};
