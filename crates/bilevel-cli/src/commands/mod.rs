pub mod config;
pub mod crop;
pub mod info;
pub mod run;
pub mod stats;
