//! Document Q&A terminal client
//!
//! Exposes modules for the binary and for testing

pub mod api;
pub mod config;
pub mod controller;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod ui;
pub mod utils;
