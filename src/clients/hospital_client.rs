use crate::error::RegistryError;
use crate::model::Hospital;
use async_trait::async_trait;
use collection_framework::{CollectionClient, FrameworkError, RecordClient};

/// Client for interacting with the Hospital actor.
#[derive(Clone)]
pub struct HospitalClient {
    inner: CollectionClient<Hospital>,
}

impl HospitalClient {
    pub fn new(inner: CollectionClient<Hospital>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Hospital> for HospitalClient {
    type Error = RegistryError;

    fn inner(&self) -> &CollectionClient<Hospital> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RegistryError::Collection(e)
    }
}
