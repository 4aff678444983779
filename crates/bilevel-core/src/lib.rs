pub mod binarize;
pub mod buffer;
pub mod color;
pub mod config;
pub mod consts;
pub mod crop;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod stats;
pub mod view;
