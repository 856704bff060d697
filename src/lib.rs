/*
    Top-level
*/

mod array;
mod context;
mod error;
mod number;
mod numbers;
mod shape;

pub use array::*;
pub use context::*;
pub use error::*;
pub use number::*;
pub use numbers::*;
pub use shape::*;
