//! Identifier aliases
//!
//! The server hands out integer primary keys; these aliases keep call sites
//! readable without the ceremony of newtype wrappers.

/// Unique track identifier (server-assigned, stable)
pub type TrackId = i64;

/// Unique playlist identifier
pub type PlaylistId = i64;

/// Unique user identifier
pub type UserId = i64;
