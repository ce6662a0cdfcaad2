//! Domain model: the category aggregate, its identifier and the validation
//! primitives it is built on.

pub mod category;
pub mod types;
pub mod validation;
