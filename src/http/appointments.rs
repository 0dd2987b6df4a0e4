//! Appointment routes. Besides the usual collection routes:
//! - GET /appointments/patientName/:query
//! - GET /appointments/doctor/:doctor_id
//!
//! The doctor listing matches by substring when rendered as text and requires the
//! exact id when rendered as JSON.

use super::negotiate::{receipt_response, Rendering};
use super::AppState;
use crate::error::RegistryError;
use crate::model::{Appointment, AppointmentCreate, AppointmentUpdate};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use collection_framework::{MatchPolicy, RecordClient};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments).post(create_appointment))
        .route(
            "/appointments/:id",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/appointments/patientName/:query", get(by_patient_name))
        .route("/appointments/doctor/:doctor_id", get(by_doctor))
}

async fn list_appointments(
    State(state): State<AppState>,
    rendering: Rendering,
) -> Result<Response, RegistryError> {
    let selection = state.appointments.list_all().await?;
    Ok(rendering.selection(selection, Appointment::text_line))
}

async fn get_appointment(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let appointment = state.appointments.get(&id).await?;
    Ok(rendering.record(appointment, Appointment::patient_line))
}

async fn by_patient_name(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(query): Path<String>,
) -> Result<Response, RegistryError> {
    let selection = state.appointments.by_patient_name(&query).await?;
    Ok(rendering.selection(selection, Appointment::patient_line))
}

async fn by_doctor(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(doctor_id): Path<String>,
) -> Result<Response, RegistryError> {
    let policy = match rendering {
        Rendering::Text => MatchPolicy::Substring,
        Rendering::Json => MatchPolicy::Exact,
    };
    let selection = state.appointments.by_doctor(&doctor_id, policy).await?;
    Ok(rendering.selection(selection, Appointment::doctor_line))
}

async fn create_appointment(
    State(state): State<AppState>,
    Json(params): Json<AppointmentCreate>,
) -> Result<Response, RegistryError> {
    let created = state.appointments.create(params).await?;
    Ok(receipt_response(created.receipt))
}

async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<AppointmentUpdate>,
) -> Result<Response, RegistryError> {
    let receipt = state.appointments.update(&id, update).await?;
    Ok(receipt_response(receipt))
}

async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let receipt = state.appointments.delete(&id).await?;
    Ok(receipt_response(receipt))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{body_text, Mocks};
    use crate::model::{Appointment, AppointmentFilter};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use collection_framework::{MatchPolicy, Selection};
    use tower::ServiceExt;

    fn booking() -> Appointment {
        Appointment {
            id: "app001".to_string(),
            patient_name: "Kamal".to_string(),
            doctor_id: "doc010".to_string(),
            hospital_id: "hos001".to_string(),
            appointment_date: "2024-05-01".to_string(),
            appointment_number: "4".to_string(),
        }
    }

    fn by_doctor(doctor: &'static str, expected: MatchPolicy) -> impl Fn(&AppointmentFilter) -> bool {
        move |f: &AppointmentFilter| {
            matches!(f, AppointmentFilter::Doctor { doctor_id, policy }
                if doctor_id == doctor && *policy == expected)
        }
    }

    #[tokio::test]
    async fn test_doctor_text_uses_substring() {
        let mut mocks = Mocks::new();
        mocks
            .appointments
            .expect_find_where(by_doctor("doc01", MatchPolicy::Substring))
            .return_ok(Selection::new(vec![booking()], 1));

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/appointments/doctor/doc01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await.trim_end(), "ID = app001, Doctor = doc010");
        mocks.appointments.verify();
    }

    #[tokio::test]
    async fn test_doctor_json_uses_exact() {
        let mut mocks = Mocks::new();
        mocks
            .appointments
            .expect_find_where(by_doctor("doc010", MatchPolicy::Exact))
            .return_ok(Selection::new(vec![booking()], 1));

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/appointments/doctor/doc010")
                    .header("accept", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json[0]["doctorId"], "doc010");
        mocks.appointments.verify();
    }

    #[tokio::test]
    async fn test_patient_name_filter() {
        let mut mocks = Mocks::new();
        mocks
            .appointments
            .expect_find_where(|f| matches!(f, AppointmentFilter::PatientName(q) if q == "kam"))
            .return_ok(Selection::new(vec![booking()], 1));

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/appointments/patientName/kam")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_text(resp).await.trim_end(), "ID = app001, Patient Name = Kamal");
        mocks.appointments.verify();
    }
}
