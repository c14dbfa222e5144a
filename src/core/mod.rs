//! Core catalog logic — types, insertion guard, resolution, file loading.

pub mod catalog;
pub mod error;
pub mod guard;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod shared;
pub mod types;
