//! HTTP handlers

pub mod forms;
pub mod health;
pub mod routes;
