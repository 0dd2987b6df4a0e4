//! Pure data structures (DTOs) for the three collections, with their create, update
//! and filter payloads and their plain-text projections.

pub mod appointment;
pub mod doctor;
pub mod hospital;

pub use appointment::*;
pub use doctor::*;
pub use hospital::*;
