//! Dataset models and loading for talent-mcp.
//!
//! This crate defines the canonical record model shared by the query engine
//! and the MCP tool surface, plus the immutable dataset snapshot type that
//! every tool reads from.

pub mod dataset;
pub mod models;

pub use dataset::{Dataset, DatasetError};
pub use models::*;
