//! [`CollectionEntity`] implementation for [`Hospital`].
//!
//! Hospitals have no queries besides id lookup, so the filter type is uninhabited.

use crate::model::{Hospital, HospitalCreate, HospitalFilter, HospitalUpdate};
use collection_framework::CollectionEntity;

impl CollectionEntity for Hospital {
    const KIND: &'static str = "Hospital";
    const ID_PREFIX: &'static str = "hos";

    type Create = HospitalCreate;
    type Update = HospitalUpdate;
    type Filter = HospitalFilter;

    fn from_create_params(id: String, params: HospitalCreate) -> Self {
        Self {
            id,
            name: params.name,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn on_update(&mut self, update: HospitalUpdate) -> String {
        std::mem::replace(&mut self.name, update.name)
    }

    fn matches(&self, filter: &HospitalFilter) -> bool {
        match *filter {}
    }
}
