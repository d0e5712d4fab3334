pub mod config;
pub mod logging;

// Core modules
pub mod ext;
pub mod git;
pub mod glob;
pub mod rename;
pub mod slug;
pub mod walk;
