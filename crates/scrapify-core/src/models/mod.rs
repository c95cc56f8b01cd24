//! Data models for company records and configuration.

pub mod company;
pub mod config;
