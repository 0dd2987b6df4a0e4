//! The hospital collection.

pub mod entity;

use crate::clients::HospitalClient;
use crate::model::Hospital;
use collection_framework::CollectionActor;

/// Creates a new Hospital actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Hospital>, HospitalClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    let client = HospitalClient::new(generic_client);

    (actor, client)
}
