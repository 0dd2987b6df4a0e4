use collection_framework::{MatchPolicy, Outcome, RecordClient};
use ichannel::lifecycle::RegistrySystem;
use ichannel::model::{AppointmentCreate, DoctorCreate, HospitalCreate, HospitalUpdate};

fn hospital(name: &str) -> HospitalCreate {
    HospitalCreate {
        name: name.to_string(),
    }
}

fn doctor(name: &str, last_name: &str, specialization: &str, hospitals: &[&str]) -> DoctorCreate {
    DoctorCreate {
        name: name.to_string(),
        last_name: last_name.to_string(),
        specialization: specialization.to_string(),
        hospitals: hospitals.iter().map(|h| h.to_string()).collect(),
    }
}

fn appointment(patient_name: &str, doctor_id: &str) -> AppointmentCreate {
    AppointmentCreate {
        patient_name: patient_name.to_string(),
        doctor_id: doctor_id.to_string(),
        hospital_id: "hos001".to_string(),
        appointment_date: "2024-05-01".to_string(),
        appointment_number: "1".to_string(),
    }
}

/// Create, read back, rename and delete a hospital through the running system.
#[tokio::test]
async fn test_hospital_lifecycle() {
    let system = RegistrySystem::new();

    let created = system
        .hospitals
        .create(hospital("General"))
        .await
        .expect("Failed to create hospital");
    assert_eq!(created.record.id, "hos001");
    assert_eq!(created.receipt.outcome, Outcome::Created);
    assert_eq!(
        system.hospitals.list_all().await.unwrap().collection_size,
        1
    );

    let fetched = system
        .hospitals
        .get("HOS001")
        .await
        .expect("Failed to get hospital")
        .expect("Hospital not found");
    assert_eq!(fetched, created.record);

    let receipt = system
        .hospitals
        .update(
            "hos001",
            HospitalUpdate {
                name: "Central".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(receipt.message, "General renamed to Central");

    let receipt = system.hospitals.delete("hos001").await.unwrap();
    assert_eq!(receipt.message, "Deleted Hospital Central");
    assert!(system.hospitals.list_all().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

/// Deleting the first of two hospitals leaves a gap that the next id skips.
#[tokio::test]
async fn test_deleted_gap_is_not_reused() {
    let system = RegistrySystem::new();

    system.hospitals.create(hospital("A")).await.unwrap();
    system.hospitals.create(hospital("B")).await.unwrap();
    system.hospitals.delete("hos001").await.unwrap();
    let third = system.hospitals.create(hospital("C")).await.unwrap();

    assert_eq!(third.record.id, "hos003");
    system.shutdown().await.unwrap();
}

/// A rename of an unknown id reports not-found and leaves the collection alone.
#[tokio::test]
async fn test_update_missing_leaves_collection_unchanged() {
    let system = RegistrySystem::new();
    system.hospitals.create(hospital("General")).await.unwrap();

    let receipt = system
        .hospitals
        .update(
            "hos042",
            HospitalUpdate {
                name: "Elsewhere".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(receipt.is_not_found());
    assert!(receipt.message.starts_with("hos042 is not found."));
    let all = system.hospitals.list_all().await.unwrap().into_records();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "General");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_doctor_queries() {
    let system = RegistrySystem::new();
    for d in [
        doctor("Nimal", "Jayasekara", "Cardiology", &["Asiri Central", "Lanka"]),
        doctor("Sunil", "Jayaratna", "Neurology", &["Nawaloka"]),
        doctor("Kamal", "Wijaya", "Cardiac Surgery", &["Central Clinic"]),
    ] {
        system.doctors.create(d).await.unwrap();
    }

    let by_last = system.doctors.by_last_name("JAYA").await.unwrap();
    let ids: Vec<_> = by_last.records.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["doc001", "doc002"]);

    let by_spec = system.doctors.by_specialization("card").await.unwrap();
    assert_eq!(by_spec.len(), 2);

    // "central" appears in two of Nimal's hospitals; he is still listed once.
    let by_hospital = system.doctors.by_hospital("central").await.unwrap();
    let ids: Vec<_> = by_hospital.records.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["doc001", "doc003"]);

    let none = system.doctors.by_hospital("Durdans").await.unwrap();
    assert!(none.is_empty());
    assert_eq!(none.collection_size, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_appointment_doctor_policies() {
    let system = RegistrySystem::new();
    system.appointments.create(appointment("Kamal", "doc001")).await.unwrap();
    system.appointments.create(appointment("Nimali", "doc010")).await.unwrap();

    let loose = system
        .appointments
        .by_doctor("doc01", MatchPolicy::Substring)
        .await
        .unwrap();
    assert_eq!(loose.len(), 1);
    assert_eq!(loose.records[0].doctor_id, "doc010");

    let both = system
        .appointments
        .by_doctor("DOC0", MatchPolicy::Substring)
        .await
        .unwrap();
    assert_eq!(both.len(), 2);

    let none_exact = system
        .appointments
        .by_doctor("doc0", MatchPolicy::Exact)
        .await
        .unwrap();
    assert!(none_exact.is_empty());

    let strict = system
        .appointments
        .by_doctor("DOC010", MatchPolicy::Exact)
        .await
        .unwrap();
    assert_eq!(strict.len(), 1);
    assert_eq!(strict.records[0].patient_name, "Nimali");

    let by_patient = system.appointments.by_patient_name("mal").await.unwrap();
    assert_eq!(by_patient.len(), 2);

    system.shutdown().await.unwrap();
}

/// Concurrent creates across handlers never hand out the same id twice.
#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let system = RegistrySystem::with_buffer_size(4);

    let mut tasks = Vec::new();
    for i in 0..30 {
        let client = system.doctors.clone();
        tasks.push(tokio::spawn(async move {
            client
                .create(doctor(&format!("D{i}"), "Perera", "ENT", &[]))
                .await
                .unwrap()
                .record
                .id
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 30);
    assert_eq!(ids.first().map(String::as_str), Some("doc001"));
    assert_eq!(ids.last().map(String::as_str), Some("doc030"));

    system.shutdown().await.unwrap();
}
