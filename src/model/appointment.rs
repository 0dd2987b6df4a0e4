use collection_framework::render::fields_line;
use collection_framework::MatchPolicy;
use serde::{Deserialize, Serialize};

/// A patient's booking with a doctor at a hospital.
///
/// `doctor_id` and `hospital_id` are references by convention only; nothing checks
/// that they exist in the other collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub hospital_id: String,
    pub appointment_date: String,
    pub appointment_number: String,
}

/// Payload for booking an appointment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreate {
    pub patient_name: String,
    pub doctor_id: String,
    pub hospital_id: String,
    pub appointment_date: String,
    pub appointment_number: String,
}

/// Payload for changing the patient name on an appointment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub patient_name: String,
}

/// Appointment queries.
#[derive(Debug, Clone)]
pub enum AppointmentFilter {
    /// Patient name contains the query.
    PatientName(String),
    /// Doctor id compared with the given policy. The text listing matches by
    /// substring while the JSON listing requires an exact id.
    Doctor { doctor_id: String, policy: MatchPolicy },
}

impl Appointment {
    /// Every field, as listed by `GET /appointments`.
    pub fn text_line(&self) -> String {
        fields_line(&[
            ("ID", &self.id),
            ("Patient Name", &self.patient_name),
            ("Doctor ID", &self.doctor_id),
            ("Hospital ID", &self.hospital_id),
            ("Appointment Date", &self.appointment_date),
            ("Appointment Number", &self.appointment_number),
        ])
    }

    /// `ID = app001, Patient Name = Kamal`
    pub fn patient_line(&self) -> String {
        fields_line(&[("ID", &self.id), ("Patient Name", &self.patient_name)])
    }

    /// `ID = app001, Doctor = doc003`
    pub fn doctor_line(&self) -> String {
        fields_line(&[("ID", &self.id), ("Doctor", &self.doctor_id)])
    }
}
