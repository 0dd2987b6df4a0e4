//! The HTTP boundary.
//!
//! Thin axum handlers that turn a request into one client call and the answer into
//! a response. Routing is per collection:
//!
//! | Method | Path | |
//! |--------|------|-|
//! | GET | `/{c}` | list all |
//! | GET | `/{c}/{field}/{query}` | filtered list |
//! | GET | `/{c}/{id}` | get one |
//! | POST | `/{c}` | create (JSON body) |
//! | PUT | `/{c}/{id}` | rename (JSON body) |
//! | DELETE | `/{c}/{id}` | delete |
//!
//! Trailing slashes are trimmed before routing.

pub mod appointments;
pub mod doctors;
pub mod hospitals;
pub mod negotiate;

#[cfg(test)]
mod test_support;

pub use negotiate::Rendering;

use crate::clients::{AppointmentClient, DoctorClient, HospitalClient};
use crate::error::RegistryError;
use crate::lifecycle::RegistrySystem;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub appointments: AppointmentClient,
    pub doctors: DoctorClient,
    pub hospitals: HospitalClient,
}

impl AppState {
    pub fn from_system(system: &RegistrySystem) -> Self {
        Self {
            appointments: system.appointments.clone(),
            doctors: system.doctors.clone(),
            hospitals: system.hospitals.clone(),
        }
    }
}

/// The complete service: routes wrapped in path normalization.
pub type App = NormalizePath<Router>;

pub fn build_app(state: AppState) -> App {
    let router = Router::new()
        .route("/health", get(health))
        .merge(hospitals::routes())
        .merge(doctors::routes())
        .merge(appointments::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serves `app` until `shutdown` resolves. The router, and with it every client
/// clone it holds, is dropped before this returns.
pub async fn serve<F>(listener: TcpListener, app: App, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        error!("Request failed: {self}");
        let status = match self {
            RegistryError::Collection(_) => StatusCode::SERVICE_UNAVAILABLE,
            RegistryError::Io(_) | RegistryError::ActorTask(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
