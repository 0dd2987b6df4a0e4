use crate::clients::{AppointmentClient, DoctorClient, HospitalClient};
use crate::error::RegistryError;
use tracing::{error, info};

/// Default request queue capacity of each collection actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Owns the three collection actors of the registry.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the collection actors
/// - **Client Distribution**: Handing out clients to the HTTP layer
///
/// The collections are independent of each other. An appointment's `doctor_id` is
/// never checked against the doctor collection, so no actor needs another actor's
/// client.
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new();
///
/// let created = system.hospitals.create(HospitalCreate { name: "General".into() }).await?;
/// assert_eq!(created.record.id, "hos001");
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    pub appointments: AppointmentClient,
    pub doctors: DoctorClient,
    pub hospitals: HospitalClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Starts every collection actor with the default queue capacity.
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }

    /// Starts every collection actor, each in its own Tokio task.
    ///
    /// `buffer_size` must be non-zero.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        let (appointment_actor, appointments) = crate::appointment_actor::new(buffer_size);
        let (doctor_actor, doctors) = crate::doctor_actor::new(buffer_size);
        let (hospital_actor, hospitals) = crate::hospital_actor::new(buffer_size);

        let handles = vec![
            tokio::spawn(appointment_actor.run()),
            tokio::spawn(doctor_actor.run()),
            tokio::spawn(hospital_actor.run()),
        ];

        Self {
            appointments,
            doctors,
            hospitals,
            handles,
        }
    }

    /// Gracefully shuts down every collection.
    ///
    /// Dropping the clients closes the request channels; each actor drains what is
    /// already queued and exits its loop. Any clone of a client still held elsewhere
    /// (for example by a running router) keeps its actor alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), RegistryError> {
        info!("Shutting down registry...");

        drop(self.appointments);
        drop(self.doctors);
        drop(self.hospitals);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}
