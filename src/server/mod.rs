//! HTTP server for the community platform API.
//!
//! Layered as controller -> service -> data: controllers translate HTTP
//! into service calls, services own the business rules and transactions,
//! and the data layer wraps entity queries behind repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
