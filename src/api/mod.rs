//! API module for the HTTP endpoints
//!
//! This module provides the REST surface the review dashboard talks to.

pub mod http;
pub mod rest;
