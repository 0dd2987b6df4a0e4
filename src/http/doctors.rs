//! Doctor routes. Besides the usual collection routes:
//! - GET /doctors/specialization/:query
//! - GET /doctors/lastName/:query
//! - GET /doctors/hospital/:query

use super::negotiate::{receipt_response, Rendering};
use super::AppState;
use crate::error::RegistryError;
use crate::model::{Doctor, DoctorCreate, DoctorUpdate};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use collection_framework::RecordClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route(
            "/doctors/:id",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
        .route("/doctors/specialization/:query", get(by_specialization))
        .route("/doctors/lastName/:query", get(by_last_name))
        .route("/doctors/hospital/:query", get(by_hospital))
}

async fn list_doctors(
    State(state): State<AppState>,
    rendering: Rendering,
) -> Result<Response, RegistryError> {
    let selection = state.doctors.list_all().await?;
    Ok(rendering.selection(selection, Doctor::text_line))
}

async fn get_doctor(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let doctor = state.doctors.get(&id).await?;
    Ok(rendering.record(doctor, Doctor::brief_line))
}

async fn by_specialization(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(query): Path<String>,
) -> Result<Response, RegistryError> {
    let selection = state.doctors.by_specialization(&query).await?;
    Ok(rendering.selection(selection, Doctor::brief_line))
}

async fn by_last_name(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(query): Path<String>,
) -> Result<Response, RegistryError> {
    let selection = state.doctors.by_last_name(&query).await?;
    Ok(rendering.selection(selection, Doctor::brief_line))
}

async fn by_hospital(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(query): Path<String>,
) -> Result<Response, RegistryError> {
    let selection = state.doctors.by_hospital(&query).await?;
    Ok(rendering.selection(selection, Doctor::brief_line))
}

async fn create_doctor(
    State(state): State<AppState>,
    Json(params): Json<DoctorCreate>,
) -> Result<Response, RegistryError> {
    let created = state.doctors.create(params).await?;
    Ok(receipt_response(created.receipt))
}

async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<DoctorUpdate>,
) -> Result<Response, RegistryError> {
    let receipt = state.doctors.update(&id, update).await?;
    Ok(receipt_response(receipt))
}

async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let receipt = state.doctors.delete(&id).await?;
    Ok(receipt_response(receipt))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{body_text, Mocks};
    use crate::model::{Doctor, DoctorFilter};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use collection_framework::Selection;
    use tower::ServiceExt;

    fn nimal() -> Doctor {
        Doctor {
            id: "doc001".to_string(),
            name: "Nimal".to_string(),
            last_name: "Jayasekara".to_string(),
            specialization: "Cardiology".to_string(),
            hospitals: vec!["Asiri Central".to_string()],
        }
    }

    #[tokio::test]
    async fn test_filter_routes_send_matching_filter() {
        let mut mocks = Mocks::new();
        mocks
            .doctors
            .expect_find_where(|f| matches!(f, DoctorFilter::Specialization(q) if q == "card"))
            .return_ok(Selection::new(vec![nimal()], 2));
        mocks
            .doctors
            .expect_find_where(|f| matches!(f, DoctorFilter::LastName(q) if q == "jaya"))
            .return_ok(Selection::new(vec![nimal()], 2));
        mocks
            .doctors
            .expect_find_where(|f| matches!(f, DoctorFilter::Hospital(q) if q == "Asiri Central"))
            .return_ok(Selection::new(vec![nimal()], 2));

        for uri in [
            "/doctors/specialization/card",
            "/doctors/lastName/jaya",
            "/doctors/hospital/Asiri%20Central",
        ] {
            let resp = mocks
                .app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_text(resp).await.trim_end(), "ID = doc001, Name = Nimal");
        }

        mocks.doctors.verify();
    }

    #[tokio::test]
    async fn test_wrong_filter_is_not_answered() {
        let mut mocks = Mocks::new();
        mocks
            .doctors
            .expect_find_where(|f| matches!(f, DoctorFilter::Specialization(_)))
            .return_ok(Selection::new(vec![nimal()], 1));

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/doctors/lastName/card")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
