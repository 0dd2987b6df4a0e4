//! Handler test harness: the full router over mock collections.

use super::{build_app, App, AppState};
use crate::clients::{AppointmentClient, DoctorClient, HospitalClient};
use crate::model::{Appointment, Doctor, Hospital};
use axum::response::Response;
use collection_framework::mock::MockClient;

pub(crate) struct Mocks {
    pub appointments: MockClient<Appointment>,
    pub doctors: MockClient<Doctor>,
    pub hospitals: MockClient<Hospital>,
    pub app: App,
}

impl Mocks {
    pub fn new() -> Self {
        let appointments = MockClient::new();
        let doctors = MockClient::new();
        let hospitals = MockClient::new();
        let state = AppState {
            appointments: AppointmentClient::new(appointments.client()),
            doctors: DoctorClient::new(doctors.client()),
            hospitals: HospitalClient::new(hospitals.client()),
        };
        Self {
            appointments,
            doctors,
            hospitals,
            app: build_app(state),
        }
    }
}

pub(crate) async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
