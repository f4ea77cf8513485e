//! CLI command implementations

pub mod charset;
pub mod pack;
pub mod rasterize;
pub mod unpack;

mod reporting;
