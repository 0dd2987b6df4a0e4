//! The appointment collection, queryable by patient name and doctor.

pub mod entity;

use crate::clients::AppointmentClient;
use crate::model::Appointment;
use collection_framework::CollectionActor;

/// Creates a new Appointment actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Appointment>, AppointmentClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    let client = AppointmentClient::new(generic_client);

    (actor, client)
}
