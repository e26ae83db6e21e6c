pub mod common;
pub mod export;
pub mod food;
pub mod suggestion;
pub mod workflow;
