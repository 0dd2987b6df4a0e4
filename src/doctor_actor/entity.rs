//! [`CollectionEntity`] implementation for [`Doctor`].
//!
//! Specialization and last name are prefix queries. The hospital query looks for the
//! text anywhere in any of the doctor's hospital names; a doctor is selected at most
//! once however many of their hospitals match.

use crate::model::{Doctor, DoctorCreate, DoctorFilter, DoctorUpdate};
use collection_framework::{CollectionEntity, MatchPolicy};

impl CollectionEntity for Doctor {
    const KIND: &'static str = "Doctor";
    const ID_PREFIX: &'static str = "doc";

    type Create = DoctorCreate;
    type Update = DoctorUpdate;
    type Filter = DoctorFilter;

    fn from_create_params(id: String, params: DoctorCreate) -> Self {
        Self {
            id,
            name: params.name,
            last_name: params.last_name,
            specialization: params.specialization,
            hospitals: params.hospitals,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn on_update(&mut self, update: DoctorUpdate) -> String {
        std::mem::replace(&mut self.name, update.name)
    }

    fn matches(&self, filter: &DoctorFilter) -> bool {
        match filter {
            DoctorFilter::Specialization(query) => {
                MatchPolicy::Prefix.matches(&self.specialization, query)
            }
            DoctorFilter::LastName(query) => MatchPolicy::Prefix.matches(&self.last_name, query),
            DoctorFilter::Hospital(query) => MatchPolicy::Substring
                .matches_any(self.hospitals.iter().map(String::as_str), query),
        }
    }

    fn created_message(&self) -> String {
        format!(
            "POST Doctor: {} with new ID: {} specialization: {}",
            self.name, self.id, self.specialization
        )
    }
}
