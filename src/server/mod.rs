//! User service backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and the unrouted fallback
//! - **Service Layer** (`service/`) - Business rules, chiefly the "not found" policy
//! - **Data Layer** (`data/`) - `UserStore` trait and its SeaORM repository
//! - **Model Layer** (`model/`) - Domain user, partial updates, credentials and their validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Optional API key guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Doc** (`doc`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request, or hands it to the fallback
//! 2. **Middleware** checks the API key when one is configured
//! 3. **Extractors** parse and validate the path id and JSON body
//! 4. **Controller** calls the service and wraps the result in the envelope
//! 5. **Service** applies business rules on top of the store
//! 6. **Error Layer** renders any failure along the way as an envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
