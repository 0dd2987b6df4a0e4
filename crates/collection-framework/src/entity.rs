//! # CollectionEntity Trait
//!
//! The `CollectionEntity` trait is the contract every record kind (Hospital, Doctor,
//! Appointment, …) implements to be managed by the generic `CollectionActor`. It names
//! the kind and id prefix, the DTOs for create and update, and the filter type the
//! collection can be queried with.
//!
//! # Architecture Note
//! The three collections of the service differ only in their fields. By pushing those
//! differences behind associated types and a handful of accessors, the actor loop, the
//! id generator and the client are written *once*.
//!
//! We use "Associated Types" (type Create, type Filter, etc.) to enforce type safety.
//! A `Doctor` collection accepts a `DoctorCreate` payload and a `DoctorFilter`, and you
//! can't accidentally send it a `HospitalCreate`.

use std::fmt::Debug;

/// Trait that any record kind must implement to be managed by [`CollectionActor`](crate::CollectionActor).
///
/// Ids are plain strings of the form `<ID_PREFIX><number>`, generated by the actor
/// (see [`ident`](crate::ident)). The entity never picks its own id.
pub trait CollectionEntity: Clone + Send + Sync + Debug + 'static {
    /// Human readable kind used in messages and logs (e.g. `"Hospital"`).
    const KIND: &'static str;

    /// Three letter prefix of generated ids (e.g. `"hos"`).
    const ID_PREFIX: &'static str;

    /// The data required to create a new record. Any client supplied id is not part of it.
    type Create: Send + Sync + Debug;

    /// The data required to rename an existing record.
    type Update: Send + Sync + Debug;

    /// Queries this collection supports besides id lookup.
    type Filter: Send + Sync + Debug;

    /// Construct the full record from the assigned id and the payload.
    fn from_create_params(id: String, params: Self::Create) -> Self;

    fn id(&self) -> &str;

    /// The descriptive field that update renames and messages refer to.
    fn label(&self) -> &str;

    /// Apply an update in place and return the previous label.
    ///
    /// Only the label changes; the id and every other field are left as they were.
    fn on_update(&mut self, update: Self::Update) -> String;

    /// Whether this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Confirmation message returned when the record has been created.
    fn created_message(&self) -> String {
        format!(
            "POST {}: {} with new ID: {}",
            Self::KIND,
            self.label(),
            self.id()
        )
    }
}
