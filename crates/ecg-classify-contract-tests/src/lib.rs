//! Frozen wire contract checks for the prediction service.
//!
//! Schemas and fixtures live under the workspace `contracts/` directory; the
//! checks themselves are in `tests/`.

/// Workspace-relative directory holding schemas and fixtures.
pub const CONTRACTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../contracts");
