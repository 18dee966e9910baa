//! gridstats - a record-management service for football player statistics
//!
//! CRUD over a loosely-typed player collection plus a fixed vocabulary of
//! aggregate queries, served over HTTP.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
