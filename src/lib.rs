pub mod align;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod error;
pub mod formats;
pub mod model;
pub mod pipeline;
