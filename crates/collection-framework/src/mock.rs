//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `CollectionClient<T>` whose requests are answered
//! from a queue of expectations instead of a running actor. Use it to test code that
//! sits *around* a client (typed clients, HTTP handlers) deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real collection |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Use Case** | Logic around the client | The collection itself or the full system |
//! | **Failure Injection** | Easy (`return_dropped`) | Hard (actor must die) |
//!
//! ## Example
//!
//! ```rust
//! use collection_framework::mock::MockClient;
//! use collection_framework::{CollectionEntity, Receipt};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ward { id: String, name: String }
//! #[derive(Debug)] struct WardCreate { name: String }
//! #[derive(Debug)] struct WardUpdate { name: String }
//! #[derive(Debug)] enum WardFilter {}
//!
//! impl CollectionEntity for Ward {
//!     const KIND: &'static str = "Ward";
//!     const ID_PREFIX: &'static str = "war";
//!     type Create = WardCreate;
//!     type Update = WardUpdate;
//!     type Filter = WardFilter;
//!
//!     fn from_create_params(id: String, params: WardCreate) -> Self { Self { id, name: params.name } }
//!     fn id(&self) -> &str { &self.id }
//!     fn label(&self) -> &str { &self.name }
//!     fn on_update(&mut self, update: WardUpdate) -> String { std::mem::replace(&mut self.name, update.name) }
//!     fn matches(&self, filter: &WardFilter) -> bool { match *filter {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ward>::new();
//!     mock.expect_delete("war009").return_ok(Receipt::delete_missing("war009"));
//!
//!     let receipt = mock.client().delete("war009").await.unwrap();
//!     assert!(receipt.is_not_found());
//!     mock.verify();
//! }
//! ```

use crate::{CollectionClient, CollectionEntity, CollectionRequest, Created, Receipt, Selection};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Decides whether a `Find` request carries the expected filter.
type FilterCheck<T> = Box<dyn Fn(&<T as CollectionEntity>::Filter) -> bool + Send>;

/// An expected request and the reply to give. A `None` reply drops the responder,
/// which the client observes as [`FrameworkError::ActorDropped`](crate::FrameworkError::ActorDropped).
enum Expectation<T: CollectionEntity> {
    List {
        reply: Option<Selection<T>>,
    },
    Find {
        check: Option<FilterCheck<T>>,
        reply: Option<Selection<T>>,
    },
    Get {
        id: String,
        reply: Option<Option<T>>,
    },
    Create {
        reply: Option<Created<T>>,
    },
    Update {
        id: String,
        reply: Option<Receipt>,
    },
    Delete {
        id: String,
        reply: Option<Receipt>,
    },
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: CollectionEntity> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

fn reply_with<R>(respond_to: oneshot::Sender<R>, reply: Option<R>) {
    if let Some(value) = reply {
        let _ = respond_to.send(value);
    }
}

fn check_id(expected: &str, actual: &str) {
    if expected != actual {
        panic!("Expected request for id {expected}, got {actual}");
    }
}

fn check_filter<F: std::fmt::Debug>(check: &(dyn Fn(&F) -> bool + Send), actual: &F) {
    if !check(actual) {
        panic!("Unexpected filter {actual:?}");
    }
}

impl<T: CollectionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (CollectionRequest::List { respond_to }, Some(Expectation::List { reply })) => {
                        reply_with(respond_to, reply)
                    }
                    (
                        CollectionRequest::Find { filter, respond_to },
                        Some(Expectation::Find { check, reply }),
                    ) => {
                        if let Some(check) = check {
                            check_filter(check.as_ref(), &filter);
                        }
                        reply_with(respond_to, reply)
                    }
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, reply }),
                    ) => {
                        check_id(&expected, &id);
                        reply_with(respond_to, reply)
                    }
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { reply }),
                    ) => reply_with(respond_to, reply),
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, reply }),
                    ) => {
                        check_id(&expected, &id);
                        reply_with(respond_to, reply)
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, reply }),
                    ) => {
                        check_id(&expected, &id);
                        reply_with(respond_to, reply)
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    fn expect<R: 'static>(
        &mut self,
        build: impl FnOnce(Option<R>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            build: Box::new(build),
        }
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Selection<T>> {
        self.expect(|reply| Expectation::List { reply })
    }

    /// Expects a `Find` with any filter.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Selection<T>> {
        self.expect(|reply| Expectation::Find { check: None, reply })
    }

    /// Expects a `Find` whose filter satisfies `check`. A filter that does not
    /// panics the mock, so the caller sees a dropped reply.
    pub fn expect_find_where<P>(&mut self, check: P) -> ExpectationBuilder<T, Selection<T>>
    where
        P: Fn(&T::Filter) -> bool + Send + 'static,
    {
        self.expect(move |reply| Expectation::Find {
            check: Some(Box::new(check)),
            reply,
        })
    }

    pub fn expect_get(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, Option<T>> {
        let id = id.into();
        self.expect(move |reply| Expectation::Get { id, reply })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, Created<T>> {
        self.expect(|reply| Expectation::Create { reply })
    }

    pub fn expect_update(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, Receipt> {
        let id = id.into();
        self.expect(move |reply| Expectation::Update { id, reply })
    }

    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, Receipt> {
        let id = id.into();
        self.expect(move |reply| Expectation::Delete { id, reply })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: CollectionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: CollectionEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Option<R>) -> Expectation<T> + Send>,
}

impl<T: CollectionEntity, R> ExpectationBuilder<T, R> {
    /// Answer the request with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Some(value));
    }

    /// Drop the responder without answering, as a crashed actor would.
    pub fn return_dropped(self) {
        self.push(None);
    }

    fn push(self, reply: Option<R>) {
        let expectation = (self.build)(reply);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the raw receiver its requests arrive on.
///
/// Lower level than [`MockClient`]: the test reads each request itself and answers
/// through the request's `respond_to` channel.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}
