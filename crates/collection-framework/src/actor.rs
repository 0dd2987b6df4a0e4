//! # Generic Collection Actor
//!
//! This module defines the `CollectionActor`, the component that owns one collection
//! of records. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the store.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::filter::same_id;
use crate::ident::next_id;
use crate::message::CollectionRequest;
use crate::receipt::{Created, Receipt};
use crate::render::Selection;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Every request for this collection goes through one channel and is handled to
/// completion before the next one is read. Generating an id and appending the record,
/// or finding a record and renaming/removing it, therefore happen as one step relative
/// to every other request, with no `Mutex` around the store.
///
/// The store is a `Vec` rather than a map: records keep their insertion order, and
/// updates happen in place so they never reorder anything.
///
/// ```rust
/// use collection_framework::{CollectionActor, CollectionEntity};
///
/// #[derive(Clone, Debug)]
/// struct Ward { id: String, name: String }
/// #[derive(Debug)] struct WardCreate { name: String }
/// #[derive(Debug)] struct WardUpdate { name: String }
/// #[derive(Debug)] enum WardFilter {}
///
/// impl CollectionEntity for Ward {
///     const KIND: &'static str = "Ward";
///     const ID_PREFIX: &'static str = "war";
///     type Create = WardCreate;
///     type Update = WardUpdate;
///     type Filter = WardFilter;
///
///     fn from_create_params(id: String, params: WardCreate) -> Self { Self { id, name: params.name } }
///     fn id(&self) -> &str { &self.id }
///     fn label(&self) -> &str { &self.name }
///     fn on_update(&mut self, update: WardUpdate) -> String { std::mem::replace(&mut self.name, update.name) }
///     fn matches(&self, filter: &WardFilter) -> bool { match *filter {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Ward>::new(10);
///     tokio::spawn(actor.run());
///
///     let created = client.create(WardCreate { name: "East".into() }).await.unwrap();
///     assert_eq!(created.record.id, "war001");
/// }
/// ```
pub struct CollectionActor<T: CollectionEntity> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    store: Vec<T>,
}

impl<T: CollectionEntity> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. Must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.store.iter().position(|record| same_id(record.id(), id))
    }

    fn select(&self, filter: Option<&T::Filter>) -> Selection<T> {
        let records = self
            .store
            .iter()
            .filter(|record| filter.map_or(true, |f| record.matches(f)))
            .cloned()
            .collect();
        Selection::new(records, self.store.len())
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::List { respond_to } => {
                    let selection = self.select(None);
                    debug!(entity_type, size = selection.collection_size, "List");
                    let _ = respond_to.send(selection);
                }
                CollectionRequest::Find { filter, respond_to } => {
                    let selection = self.select(Some(&filter));
                    debug!(entity_type, ?filter, matched = selection.len(), "Find");
                    let _ = respond_to.send(selection);
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(item);
                }
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = next_id(&self.store);
                    let record = T::from_create_params(id.clone(), params);
                    let receipt = Receipt::created(&record);
                    self.store.push(record.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Created { record, receipt });
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let receipt = match self.position(&id) {
                        Some(idx) => {
                            let record = &mut self.store[idx];
                            let old = record.on_update(update);
                            info!(entity_type, %id, from = %old, to = %record.label(), "Updated");
                            Receipt::renamed(&old, record.label())
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Receipt::update_missing(&id)
                        }
                    };
                    let _ = respond_to.send(receipt);
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let receipt = match self.position(&id) {
                        Some(idx) => {
                            let record = self.store.remove(idx);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            Receipt::deleted(&record)
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Receipt::delete_missing(&id)
                        }
                    };
                    let _ = respond_to.send(receipt);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
