//! # iChannel
//!
//! > **An in-memory registry of hospitals, doctors and appointments, served over HTTP.**
//!
//! Each of the three collections keeps an ordered list of records with generated,
//! human-readable ids (`hos001`, `doc001`, `app001`) and supports listing, filtered
//! queries, creation, renaming and deletion. Nothing is persisted; state lives as
//! long as the process.
//!
//! ## Concurrency Model
//!
//! Every collection is owned by a [`CollectionActor`](collection_framework::CollectionActor)
//! running in its own Tokio task. Requests are processed one at a time, so
//! "compute the next id, then append" and "find by id, then mutate" never interleave
//! within a collection, while the three collections run in parallel.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Records, their create/update payloads, filters and text projections.
//!
//! ### 2. The Collections ([`hospital_actor`], [`doctor_actor`], [`appointment_actor`])
//! [`CollectionEntity`](collection_framework::CollectionEntity) implementations: id
//! prefix, rename field and query wiring per record kind.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients wrapping the generic `CollectionClient`, with the per-collection
//! queries.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Starts the actors, serves HTTP and shuts everything down.
//!
//! ### 5. The Boundary ([`http`])
//! axum routes, `Accept` negotiation and status mapping.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:8080
//! curl -X POST localhost:8080/hospitals -H 'content-type: application/json' -d '{"name":"General"}'
//! curl localhost:8080/hospitals
//! ```

pub mod appointment_actor;
pub mod clients;
pub mod config;
pub mod doctor_actor;
pub mod error;
pub mod hospital_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
