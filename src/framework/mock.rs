//! # Mock Store
//!
//! Utilities for testing store callers (repositories, services) without a real
//! [`StoreActor`](crate::framework::StoreActor).
//!
//! Two styles are available:
//!
//! - [`MockStore`]: queue expectations up front, hand out a [`StoreClient`], then
//!   call [`MockStore::verify`] at the end.
//! - [`create_mock_client`] plus the `expect_*` helpers: receive each request
//!   yourself, assert on its payload, and answer it by hand. Useful when the test
//!   needs to inspect what the caller sent.
//!
//! Failure injection is done by dropping the receiver or the responder: a dropped
//! receiver makes the client report [`StoreError::Closed`](crate::framework::StoreError::Closed),
//! a dropped responder reports [`StoreError::Dropped`](crate::framework::StoreError::Dropped).

use crate::framework::{Response, StoreClient, StoreEntity, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Represents an expected request to the mock store.
enum Expectation<T: StoreEntity> {
    Save { response: T },
    FindById { id: T::Id, response: Option<T> },
    FindAll { response: Vec<T> },
    Replace { id: T::Id, response: Option<T> },
    DeleteById { id: T::Id, response: bool },
}

/// A mock store with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request
/// that does not match the next expectation (wrong kind or wrong id) panics the
/// background task, which the caller then observes as
/// [`StoreError::Dropped`](crate::framework::StoreError::Dropped).
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Product>::new();
/// mock.expect_find_by_id(ProductId(1)).return_value(Some(product));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Save { respond_to, .. },
                        Some(Expectation::Save { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::FindById { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindAll { respond_to },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Replace { id, respond_to, .. },
                        Some(Expectation::Replace { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::DeleteById { id, respond_to },
                        Some(Expectation::DeleteById { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response: T| Expectation::Save { response })
    }

    /// Expects a `find_by_id` operation for `id`.
    pub fn expect_find_by_id(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response: Option<T>| Expectation::FindById { id, response })
    }

    /// Expects a `find_all` operation.
    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response: Vec<T>| Expectation::FindAll { response })
    }

    /// Expects a `replace` operation for `id`.
    pub fn expect_replace(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response: Option<T>| Expectation::Replace { id, response })
    }

    /// Expects a `delete_by_id` operation for `id`.
    pub fn expect_delete_by_id(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response: bool| Expectation::DeleteById { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(R) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that records what a queued expectation replies with.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    make: Box<dyn FnOnce(R) -> Expectation<T> + Send>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    /// Sets the value the mock replies with.
    pub fn return_value(self, value: R) {
        let expectation = (self.make)(value);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// The test owns the receiving end, so it can inspect every request the caller
/// sends and decide how (or whether) to answer it.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request
pub async fn expect_find_by_id<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteById request
pub async fn expect_delete_by_id<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::DeleteById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
