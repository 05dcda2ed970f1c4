/// Group DTOs.
pub mod group;
/// Health check DTOs.
pub mod health;
/// Match DTOs.
pub mod matches;
/// Player position DTOs.
pub mod point;
/// Required-field chain and decoding helpers.
pub mod validation;
