use crate::error::RegistryError;
use crate::model::{Doctor, DoctorFilter};
use async_trait::async_trait;
use collection_framework::{CollectionClient, FrameworkError, RecordClient, Selection};
use tracing::{debug, instrument};

/// Client for interacting with the Doctor actor.
#[derive(Clone)]
pub struct DoctorClient {
    inner: CollectionClient<Doctor>,
}

impl DoctorClient {
    pub fn new(inner: CollectionClient<Doctor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Doctor> for DoctorClient {
    type Error = RegistryError;

    fn inner(&self) -> &CollectionClient<Doctor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RegistryError::Collection(e)
    }
}

impl DoctorClient {
    /// Doctors whose specialization starts with `query`.
    #[instrument(skip(self))]
    pub async fn by_specialization(&self, query: &str) -> Result<Selection<Doctor>, RegistryError> {
        debug!("Sending request");
        self.find(DoctorFilter::Specialization(query.to_string()))
            .await
    }

    /// Doctors whose last name starts with `query`.
    #[instrument(skip(self))]
    pub async fn by_last_name(&self, query: &str) -> Result<Selection<Doctor>, RegistryError> {
        debug!("Sending request");
        self.find(DoctorFilter::LastName(query.to_string())).await
    }

    /// Doctors with at least one hospital name containing `query`.
    #[instrument(skip(self))]
    pub async fn by_hospital(&self, query: &str) -> Result<Selection<Doctor>, RegistryError> {
        debug!("Sending request");
        self.find(DoctorFilter::Hospital(query.to_string())).await
    }

    async fn find(&self, filter: DoctorFilter) -> Result<Selection<Doctor>, RegistryError> {
        self.inner.find(filter).await.map_err(Self::map_error)
    }
}
