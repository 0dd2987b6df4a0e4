//! # Generic Client
//!
//! This module defines the generic client for communicating with collection actors.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::receipt::{Created, Receipt};
use crate::render::Selection;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// The `CollectionClient<T>` provides a type‑safe, async API for interacting with a
/// `CollectionActor<T>`. It forwards requests over a Tokio mpsc channel and receives
/// the answer on a oneshot channel. The client holds only a sender, so it is cheap to
/// clone and share across request handlers.
pub struct CollectionClient<T: CollectionEntity> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

// Derived Clone would require `T: Clone` on every associated type.
impl<T: CollectionEntity> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CollectionEntity> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn list(&self) -> Result<Selection<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::List { respond_to })
            .await
    }

    pub async fn find(&self, filter: T::Filter) -> Result<Selection<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Find { filter, respond_to })
            .await
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<Option<T>, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, params: T::Create) -> Result<Created<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Create { params, respond_to })
            .await
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        update: T::Update,
    ) -> Result<Receipt, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| CollectionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<Receipt, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }
}
