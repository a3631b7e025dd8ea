//! Noticeboard: in-memory message boards.
//!
//! A board is a named, ordered collection of short text messages, each with
//! a vote counter and creation timestamp. This crate provides the board
//! repository and a thin service that callers such as an HTTP layer can map
//! onto request/response semantics.
//!
//! # Architecture
//!
//! Noticeboard follows hexagonal architecture principles:
//!
//! - **Domain**: Boards and messages with no infrastructure dependencies
//! - **Ports**: The repository contract and the identifier generator
//!   capability
//! - **Adapters**: In-memory storage and concrete identifier generators
//!
//! # Modules
//!
//! - [`board`]: Board and message storage
//! - [`config`]: Repository and logging configuration
//! - [`telemetry`]: Logging subscriber installation

pub mod board;
pub mod config;
pub mod telemetry;
