// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema bootstrap

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool_at, get_connection, get_database_path, ConnectionPool, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};
