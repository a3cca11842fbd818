//! MCP tool modules.
//!
//! Tools are grouped by record domain; both groups delegate to the same
//! generic skill catalog, so the five query shapes behave identically across
//! domains.

pub mod employees;
pub mod offerings;
