//! # RecordClient Trait
//!
//! Provides a common interface for collection-specific clients, adding default list,
//! lookup and mutation methods built on top of a generic `CollectionClient`.
use crate::{CollectionClient, CollectionEntity, Created, FrameworkError, Receipt, Selection};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard operations.
///
/// A typed client only has to say where its inner `CollectionClient` is and how
/// framework errors map onto its own error type. Filtered queries differ per
/// collection and stay on the typed client.
///
/// # Example
///
/// ```rust
/// use collection_framework::{CollectionClient, CollectionEntity, FrameworkError, RecordClient};
/// use async_trait::async_trait;
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
/// #[derive(Debug)]
/// struct WardError(String);
///
/// struct WardClient { inner: CollectionClient<Ward> }
///
/// #[async_trait]
/// impl RecordClient<Ward> for WardClient {
///     type Error = WardError;
///
///     fn inner(&self) -> &CollectionClient<Ward> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> WardError { WardError(e.to_string()) }
/// }
///
/// async fn usage(client: WardClient) {
///     // list_all(), get(), create(), update() and delete() come for free
///     let _ = client.get("war001").await;
///     let _ = client.delete("war001").await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: CollectionEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Every record, in insertion order.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn list_all(&self) -> Result<Selection<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a record by case-insensitive id.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn get(&self, id: &str) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Store a new record under a freshly generated id.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn create(&self, params: T::Create) -> Result<Created<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// Rename the record with the given id.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn update(&self, id: &str, update: T::Update) -> Result<Receipt, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().update(id, update).await.map_err(Self::map_error)
    }

    /// Delete the record with the given id.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn delete(&self, id: &str) -> Result<Receipt, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
