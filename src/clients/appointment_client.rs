use crate::error::RegistryError;
use crate::model::{Appointment, AppointmentFilter};
use async_trait::async_trait;
use collection_framework::{
    CollectionClient, FrameworkError, MatchPolicy, RecordClient, Selection,
};
use tracing::{debug, instrument};

/// Client for interacting with the Appointment actor.
#[derive(Clone)]
pub struct AppointmentClient {
    inner: CollectionClient<Appointment>,
}

impl AppointmentClient {
    pub fn new(inner: CollectionClient<Appointment>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Appointment> for AppointmentClient {
    type Error = RegistryError;

    fn inner(&self) -> &CollectionClient<Appointment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RegistryError::Collection(e)
    }
}

impl AppointmentClient {
    /// Appointments whose patient name contains `query`.
    #[instrument(skip(self))]
    pub async fn by_patient_name(
        &self,
        query: &str,
    ) -> Result<Selection<Appointment>, RegistryError> {
        debug!("Sending request");
        self.inner
            .find(AppointmentFilter::PatientName(query.to_string()))
            .await
            .map_err(Self::map_error)
    }

    /// Appointments for a doctor, compared with `policy`.
    #[instrument(skip(self))]
    pub async fn by_doctor(
        &self,
        doctor_id: &str,
        policy: MatchPolicy,
    ) -> Result<Selection<Appointment>, RegistryError> {
        debug!("Sending request");
        self.inner
            .find(AppointmentFilter::Doctor {
                doctor_id: doctor_id.to_string(),
                policy,
            })
            .await
            .map_err(Self::map_error)
    }
}
