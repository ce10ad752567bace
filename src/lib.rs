pub mod cli;
pub mod error;
pub mod format;
pub mod github;
pub mod types;
