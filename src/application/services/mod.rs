//! Application services - Use case implementations
//!
//! The listing facade is the single orchestration surface over the
//! in-memory repositories. The HTTP layer consumes nothing else.

pub mod facade;

pub use facade::{
    CreatePlaceRequest, CreateReviewRequest, FacadeError, ListingFacade, PlaceFilters,
    RegisterUserRequest, UpdatePlaceRequest, UpdateReviewRequest, UpdateUserRequest,
};
