//! Library crate for tournament-back, exposing modules for binaries and integration tests.

/// Application configuration.
pub mod config;
/// Transport-agnostic request controllers.
pub mod controllers;
/// Storage layer.
pub mod dao;
/// Wire types.
pub mod dto;
/// Service and HTTP errors.
pub mod error;
/// axum routes.
pub mod routes;
/// Use cases.
pub mod services;
/// Shared application state.
pub mod state;
