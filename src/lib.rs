pub mod demo;
pub mod error;
pub mod render;
pub mod tracer;
pub mod transform;

pub use error::{Error, Result};
pub use transform::{ForEachInPlace, for_each, for_each_auto, for_each_fixed};
