//! The doctor collection, queryable by specialization, last name and hospital.

pub mod entity;

use crate::clients::DoctorClient;
use crate::model::Doctor;
use collection_framework::CollectionActor;

/// Creates a new Doctor actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Doctor>, DoctorClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    let client = DoctorClient::new(generic_client);

    (actor, client)
}
