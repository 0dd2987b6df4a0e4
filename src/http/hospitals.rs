//! Hospital routes:
//! - GET    /hospitals
//! - GET    /hospitals/:id
//! - POST   /hospitals
//! - PUT    /hospitals/:id
//! - DELETE /hospitals/:id

use super::negotiate::{receipt_response, Rendering};
use super::AppState;
use crate::error::RegistryError;
use crate::model::{Hospital, HospitalCreate, HospitalUpdate};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use collection_framework::RecordClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hospitals", get(list_hospitals).post(create_hospital))
        .route(
            "/hospitals/:id",
            get(get_hospital).put(update_hospital).delete(delete_hospital),
        )
}

async fn list_hospitals(
    State(state): State<AppState>,
    rendering: Rendering,
) -> Result<Response, RegistryError> {
    let selection = state.hospitals.list_all().await?;
    Ok(rendering.selection(selection, Hospital::text_line))
}

async fn get_hospital(
    State(state): State<AppState>,
    rendering: Rendering,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let hospital = state.hospitals.get(&id).await?;
    Ok(rendering.record(hospital, Hospital::text_line))
}

async fn create_hospital(
    State(state): State<AppState>,
    Json(params): Json<HospitalCreate>,
) -> Result<Response, RegistryError> {
    let created = state.hospitals.create(params).await?;
    Ok(receipt_response(created.receipt))
}

async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<HospitalUpdate>,
) -> Result<Response, RegistryError> {
    let receipt = state.hospitals.update(&id, update).await?;
    Ok(receipt_response(receipt))
}

async fn delete_hospital(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, RegistryError> {
    let receipt = state.hospitals.delete(&id).await?;
    Ok(receipt_response(receipt))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{body_text, Mocks};
    use crate::model::Hospital;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use collection_framework::{Created, Receipt, Selection};
    use tower::ServiceExt;

    fn make_app() -> Mocks {
        Mocks::new()
    }

    fn general() -> Hospital {
        Hospital {
            id: "hos001".to_string(),
            name: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_renders_lines() {
        let mut mocks = make_app();
        mocks
            .hospitals
            .expect_list()
            .return_ok(Selection::new(vec![general()], 1));

        let resp = mocks
            .app
            .clone()
            .oneshot(Request::builder().uri("/hospitals").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await.trim_end(), "ID = hos001, Name = General");
        mocks.hospitals.verify();
    }

    #[tokio::test]
    async fn test_get_missing_as_json_is_empty_array() {
        let mut mocks = make_app();
        mocks.hospitals.expect_get("hos404").return_ok(None);

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/hospitals/hos404")
                    .header("accept", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "[]");
        mocks.hospitals.verify();
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let mut mocks = make_app();
        let record = general();
        let receipt = Receipt::created(&record);
        mocks
            .hospitals
            .expect_create()
            .return_ok(Created { record, receipt });

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hospitals")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":"hos999","name":"General"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            body_text(resp).await,
            "POST Hospital: General with new ID: hos001"
        );
        mocks.hospitals.verify();
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mocks = make_app();
        mocks
            .hospitals
            .expect_delete("hos007")
            .return_ok(Receipt::delete_missing("hos007"));

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/hospitals/hos007")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(resp).await,
            "hos007 is not found. Use DELETE with a correct ID to delete."
        );
    }

    #[tokio::test]
    async fn test_dead_collection_is_unavailable() {
        let mut mocks = make_app();
        mocks.hospitals.expect_list().return_dropped();

        let resp = mocks
            .app
            .clone()
            .oneshot(Request::builder().uri("/hospitals").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let mocks = make_app();

        let resp = mocks
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/hospitals")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
    }
}
