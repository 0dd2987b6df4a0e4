use collection_framework::render::fields_line;
use serde::{Deserialize, Serialize};

/// A hospital that doctors can be attached to.
///
/// # Collection Framework
/// This struct implements the [`CollectionEntity`](collection_framework::CollectionEntity)
/// trait in [`hospital_actor::entity`](crate::hospital_actor::entity), allowing it to be
/// managed by a [`CollectionActor`](collection_framework::CollectionActor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
}

/// Payload for creating a new hospital. An `id` in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalCreate {
    pub name: String,
}

/// Payload for renaming a hospital.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalUpdate {
    pub name: String,
}

/// Hospitals are only looked up by id.
#[derive(Debug, Clone)]
pub enum HospitalFilter {}

impl Hospital {
    /// `ID = hos001, Name = General`
    pub fn text_line(&self) -> String {
        fields_line(&[("ID", &self.id), ("Name", &self.name)])
    }
}
