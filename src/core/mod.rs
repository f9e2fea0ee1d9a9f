//! Configuration and data model shared across the worker

pub mod config;
pub mod models;
