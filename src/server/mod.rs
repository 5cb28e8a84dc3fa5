//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite as a schemaless
//! document store: every record is a JSON body in one `document` table, keyed by
//! collection and id.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and OpenAPI descriptions
//! - **Service Layer** (`service/`) - Existence, uniqueness and permission checks; review transitions
//! - **Data Layer** (`data/`) - Repositories, cross-collection joins and cascades
//! - **Mapping** (`mapping/`) - Translation between stored legacy records and domain models
//! - **Store** (`store/`) - Collection client over the `document` table
//! - **Model Layer** (`model/`) - Domain models, parameters and permission predicates
//! - **Outbound** (`outbound/`) - Mail relay, CDN and mod catalog clients behind traits
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** resolves the principal through `AuthGuard` and calls a service
//! 3. **Service** checks permissions and invariants, calls repositories
//! 4. **Repository** reads and writes collections, mapping records both ways
//! 5. **Controller** wraps the result as JSON; errors become status codes in `error/`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mapping;
pub mod middleware;
pub mod model;
pub mod outbound;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
