//! Travel Planner: slot-filling dialogue core.

pub mod config;
pub mod error;
pub mod llm;
pub mod planner;
