//! FitTrack backend library
//!
//! Exposes the backend modules to the binary and to the integration tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
