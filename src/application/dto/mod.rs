//! Data Transfer Objects - For API boundaries
//!
//! Views live in the application layer so infrastructure (HTTP) can
//! serialize responses without pulling serde concerns into the domain
//! model. Every view is plain structured data: string ids, RFC 3339
//! timestamps, no behavior.

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::AmenityView;
pub use place::PlaceView;
pub use review::ReviewView;
pub use user::UserView;
