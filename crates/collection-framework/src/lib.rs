//! # Collection Framework
//!
//! This crate provides the building blocks for in-memory record collections that are
//! safe to share between concurrent request handlers. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**: each
//! collection is a resource with a uniform list / find / get / create / update / delete
//! vocabulary, and each collection is owned by exactly one actor task.
//!
//! ## Why an actor per collection?
//!
//! A collection is a shared, ordered, mutable list. Creating a record means "compute the
//! next free id, then append"; updating or deleting means "find by id, then mutate or
//! remove". Both are read-modify-write sequences that must not interleave with other
//! requests. Putting the list inside an actor that handles one request at a time makes
//! every such sequence atomic, while separate collections still run in parallel.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`CollectionEntity`]) - the record kind: fields, id prefix, filters
//! 2. **Runtime Layer** ([`CollectionActor`]) - message processing and the ordered store
//! 3. **Interface Layer** ([`CollectionClient`], [`RecordClient`]) - type-safe communication
//!
//! Two leaf utilities are shared by every collection:
//!
//! - [`ident`] - the linear-probe id generator (`hos001`, `hos002`, …)
//! - [`filter`] - case-insensitive substring / prefix / exact matching
//!
//! Reads return a [`Selection`], which both the structured and the plain-text
//! renderings ([`render`]) are derived from. Mutations return a [`Receipt`].
//!
//! ## Testing
//!
//! See the [`mock`] module for a `MockClient` that answers requests from a queue of
//! expectations, so code around a client can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod filter;
pub mod ident;
pub mod message;
pub mod mock;
pub mod receipt;
pub mod render;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::RecordClient;
pub use entity::CollectionEntity;
pub use error::FrameworkError;
pub use filter::MatchPolicy;
pub use message::{CollectionRequest, Response};
pub use receipt::{Created, Outcome, Receipt};
pub use render::Selection;
