//! Nutricomp Tools module
//!
//! MCP tool implementations for the composition service.

pub mod compositions;
pub mod status;
