use collection_framework::render::fields_line;
use serde::{Deserialize, Serialize};

/// A doctor and the hospitals they practise at.
///
/// `hospitals` holds free-text hospital names. They are not checked against the
/// hospital collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub specialization: String,
    pub hospitals: Vec<String>,
}

/// Payload for registering a doctor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorCreate {
    pub name: String,
    pub last_name: String,
    pub specialization: String,
    #[serde(default)]
    pub hospitals: Vec<String>,
}

/// Payload for renaming a doctor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorUpdate {
    pub name: String,
}

/// Doctor queries.
#[derive(Debug, Clone)]
pub enum DoctorFilter {
    /// Specialization starts with the query.
    Specialization(String),
    /// Last name starts with the query.
    LastName(String),
    /// One of the doctor's hospitals contains the query.
    Hospital(String),
}

impl Doctor {
    /// `ID = doc001, Name = Nimal, Specialization = Cardiology`
    pub fn text_line(&self) -> String {
        fields_line(&[
            ("ID", &self.id),
            ("Name", &self.name),
            ("Specialization", &self.specialization),
        ])
    }

    /// `ID = doc001, Name = Nimal`, used by lookups and filtered listings.
    pub fn brief_line(&self) -> String {
        fields_line(&[("ID", &self.id), ("Name", &self.name)])
    }
}
