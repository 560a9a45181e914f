pub mod error;
pub mod config;
pub mod storage;
pub mod identity;
pub mod navigation;
pub mod cli;

