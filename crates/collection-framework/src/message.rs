//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `CollectionClient` and `CollectionActor`.

use crate::entity::CollectionEntity;
use crate::receipt::{Created, Receipt};
use crate::render::Selection;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every collection speaks the same small vocabulary: two kinds of listing, a lookup by
/// id, and the three mutations. The payload types come from the [`CollectionEntity`]
/// associated types, so a `Doctor` filter can't be sent to the `Hospital` collection.
///
/// - **List**: all records, in insertion order.
/// - **Find**: records selected by a [`CollectionEntity::Filter`].
/// - **Get**: one record by case-insensitive id.
/// - **Create**: assigns an id and appends.
/// - **Update**: renames a record in place.
/// - **Delete**: removes a record.
#[derive(Debug)]
pub enum CollectionRequest<T: CollectionEntity> {
    List {
        respond_to: Response<Selection<T>>,
    },
    Find {
        filter: T::Filter,
        respond_to: Response<Selection<T>>,
    },
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<Created<T>>,
    },
    Update {
        id: String,
        update: T::Update,
        respond_to: Response<Receipt>,
    },
    Delete {
        id: String,
        respond_to: Response<Receipt>,
    },
}
