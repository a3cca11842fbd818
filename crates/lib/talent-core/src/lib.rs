//! Query engine and services for talent-mcp.
//!
//! This crate owns the pure matching primitives, the generic skill catalog
//! both record domains instantiate, and the shared services bundle the MCP
//! layer hands to every session.

pub mod catalog;
pub mod engine;
pub mod services;

pub use catalog::{SkillCatalog, SkillField};
pub use engine::MatchCase;
pub use services::TalentServices;
