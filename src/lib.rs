//! LogPilot - client core for a natural-language log analysis backend
//!
//! This library holds everything a LogPilot front-end needs: a typed gateway
//! to the backend HTTP API, safe HTML rendering of answers and reports, a
//! region-partitioned UI store, and the controllers and pollers that keep
//! that store in step with the backend. The bundled binary drives it from a
//! terminal.

pub mod alerts;
pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod console;
pub mod health;
pub mod history;
pub mod logging;
pub mod performance;
pub mod render;
pub mod task;
pub mod ui;
pub mod view;
