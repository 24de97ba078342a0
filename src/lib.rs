//! # users-api
//!
//! A small REST backend exposing a single User resource over HTTP.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous persistence on SQLite
//! - **Tokio**: async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (embedded defaults, file, environment)
//! - [`db`]: connection pool bootstrap and schema initialization
//! - [`error`]: the `"Error! "` response envelope
//! - [`routes`]: HTTP handlers and router assembly
//! - [`schema`]: constraints on user records
//! - [`state`]: shared application state
//! - [`store`]: the user store trait and its SQLite implementation
//! - [`types`]: request and response DTOs
//!
//! ## Endpoints
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | `POST` | `/new` | persisted user |
//! | `GET` | `/` | all users |
//! | `DELETE` | `/delete/{id}` | `"Success! User deleted."` |
//! | `PUT` | `/update/{id}` | `"Success! User updated."` |
//!
//! Every failure on these routes is a 400 with body `"Error! <message>"`.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
