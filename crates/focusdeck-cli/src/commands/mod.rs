pub mod auth;
pub mod catalog;
pub mod config;
pub mod focus;
pub mod panel;
pub mod shell;
pub mod task;
pub mod theme;
pub mod water;
