//! # gridstats HTTP Server Module
//!
//! Axum-based HTTP API for the player record service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `POST /addPlayer` - Create a player record
//! - `PUT /updatePlayer/{playerName}` - Partial update by name
//! - `DELETE /deletePlayer/{playerName}` - Delete by name
//! - `GET /performQuery/{queryType}` - Fixed-vocabulary aggregate queries
//! - `POST /perform_query` - Legacy query vocabulary

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod player_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
