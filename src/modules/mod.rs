//! Modules layer - Infrastructure components outside the request path
//!
//! Contains the process supervisor that keeps the HTTP worker pool alive.

pub mod supervisor;
