//! [`CollectionEntity`] implementation for [`Appointment`].
//!
//! The label of an appointment is the patient name: renames change it, and
//! create and delete messages quote it.

use crate::model::{Appointment, AppointmentCreate, AppointmentFilter, AppointmentUpdate};
use collection_framework::{CollectionEntity, MatchPolicy};

impl CollectionEntity for Appointment {
    const KIND: &'static str = "Appointment";
    const ID_PREFIX: &'static str = "app";

    type Create = AppointmentCreate;
    type Update = AppointmentUpdate;
    type Filter = AppointmentFilter;

    fn from_create_params(id: String, params: AppointmentCreate) -> Self {
        Self {
            id,
            patient_name: params.patient_name,
            doctor_id: params.doctor_id,
            hospital_id: params.hospital_id,
            appointment_date: params.appointment_date,
            appointment_number: params.appointment_number,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.patient_name
    }

    fn on_update(&mut self, update: AppointmentUpdate) -> String {
        std::mem::replace(&mut self.patient_name, update.patient_name)
    }

    fn matches(&self, filter: &AppointmentFilter) -> bool {
        match filter {
            AppointmentFilter::PatientName(query) => {
                MatchPolicy::Substring.matches(&self.patient_name, query)
            }
            AppointmentFilter::Doctor { doctor_id, policy } => {
                policy.matches(&self.doctor_id, doctor_id)
            }
        }
    }

    fn created_message(&self) -> String {
        format!(
            "POST Appointment: {} with new ID: {} doctor ID: {} hospital ID: {} appointment date: {} appointment number: {}",
            self.patient_name,
            self.id,
            self.doctor_id,
            self.hospital_id,
            self.appointment_date,
            self.appointment_number
        )
    }
}
