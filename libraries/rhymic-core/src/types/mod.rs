//! Domain types for Rhymic

mod ids;
mod playlist;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{Playlist, PlaylistSummary};
pub use track::Track;
pub use user::User;
