//! REST backend integration module.
//!
//! Provides the HTTP client and data models for the property-management API.

pub mod client;
pub mod models;

pub use client::ApiClient;
