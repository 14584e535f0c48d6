pub mod config;
pub mod engine;
pub mod mindmap;
pub mod net;
pub mod render;
