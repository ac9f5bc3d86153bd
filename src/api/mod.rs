//! HTTP API layer: handlers, middleware, DTOs, and routing.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
