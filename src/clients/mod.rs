//! Type-safe wrappers around [`CollectionClient`](collection_framework::CollectionClient).

pub mod appointment_client;
pub mod doctor_client;
pub mod hospital_client;

pub use appointment_client::*;
pub use doctor_client::*;
pub use hospital_client::*;
