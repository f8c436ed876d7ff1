use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use booking_cell::{BookingError, BookingOutcome, BookingRequest, BookingService, CancellationRequest};
use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;

fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        scheduling_api_url: server.uri(),
        booking_api_url: server.uri(),
        csv_export_path: "DoctorsExport.csv".to_string(),
    }
}

fn test_service(config: &AppConfig) -> BookingService {
    BookingService::new(config, Arc::new(DoctorDirectory::new(config)))
}

fn smith_request() -> BookingRequest {
    BookingRequest {
        patient_name: "John Doe".to_string(),
        start_time: "10:30".to_string(),
        end_time: "10:45".to_string(),
        date: "31/05/2022".to_string(),
        doctor_name: "Dr. Smith".to_string(),
    }
}

async fn mount_roster(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fetchDoctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "doctorId": 1,
                    "name": "Dr. Smith",
                    "gender": "Male",
                    "hospitalName": "Central Hospital",
                    "hospitalId": 1,
                    "specialtyId": 7,
                    "branchId": 2.0,
                    "nationality": "TUR",
                    "createdAt": "2021-01-01T00:00:00Z"
                }
            ]
        })))
        .mount(server)
        .await;
}

async fn mount_smith_schedule(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fetchSchedules"))
        .and(query_param("doctorId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                {
                    "doctorId": 1,
                    "visitId": 101,
                    "id": 201,
                    "startTime": "2022-05-31T10:30:00.000Z",
                    "endTime": "2022-05-31T10:45:00.000Z"
                }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn books_matching_slot_and_relays_remote_response() {
    let server = MockServer::start().await;
    mount_roster(&server).await;
    mount_smith_schedule(&server).await;

    Mock::given(method("POST"))
        .and(path("/BookVisit"))
        .and(query_param("VisitId", "101"))
        .and(query_param("startTime", "10:30"))
        .and(query_param("endTime", "10:45"))
        .and(query_param("date", "31/05/2022"))
        .and(query_param("PatientName", "John"))
        .and(query_param("PatientSurname", "Doe"))
        .and(query_param("hospitalId", "1"))
        .and(query_param("doctorId", "1"))
        .and(query_param("branchId", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": true, "bookingId": 133213 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&test_config(&server));
    let outcome = service.book_visit(&smith_request()).await.unwrap();

    match outcome {
        BookingOutcome::Booked(response) => {
            assert!(response.status);
            assert_eq!(response.booking_id, Some(133213));
        }
        BookingOutcome::NoSlot => panic!("expected a booked outcome"),
    }
}

#[tokio::test]
async fn unknown_doctor_name_short_circuits_without_booking_call() {
    let server = MockServer::start().await;
    mount_roster(&server).await;

    Mock::given(method("POST"))
        .and(path("/BookVisit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut request = smith_request();
    request.doctor_name = "Dr. Nobody".to_string();

    let service = test_service(&test_config(&server));
    let outcome = service.book_visit(&request).await.unwrap();

    assert!(matches!(outcome, BookingOutcome::NoSlot));
}

#[tokio::test]
async fn unmatched_window_short_circuits_without_booking_call() {
    let server = MockServer::start().await;
    mount_roster(&server).await;
    mount_smith_schedule(&server).await;

    Mock::given(method("POST"))
        .and(path("/BookVisit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut request = smith_request();
    request.start_time = "11:30".to_string();
    request.end_time = "11:45".to_string();

    let service = test_service(&test_config(&server));
    let outcome = service.book_visit(&request).await.unwrap();

    assert!(matches!(outcome, BookingOutcome::NoSlot));
}

#[tokio::test]
async fn remote_booking_failure_is_distinguishable_from_no_slot() {
    let server = MockServer::start().await;
    mount_roster(&server).await;
    mount_smith_schedule(&server).await;

    Mock::given(method("POST"))
        .and(path("/BookVisit"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = test_service(&test_config(&server));
    let err = service.book_visit(&smith_request()).await.unwrap_err();

    assert!(matches!(err, BookingError::Remote(_)));
}

#[tokio::test]
async fn malformed_date_is_a_fatal_format_error() {
    let server = MockServer::start().await;
    mount_roster(&server).await;

    let mut request = smith_request();
    request.date = "05-31-2022".to_string();

    let service = test_service(&test_config(&server));
    let err = service.book_visit(&request).await.unwrap_err();

    assert!(matches!(err, BookingError::DateFormat { .. }));
}

#[tokio::test]
async fn cancellation_relays_remote_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookVisit"))
        .and(query_param("BookingID", "133213"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&test_config(&server));
    let response = service
        .cancel_visit(&CancellationRequest { booking_id: 133213 })
        .await
        .unwrap();

    assert!(response.status);
}

#[tokio::test]
async fn cancellation_remote_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookVisit"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = test_service(&test_config(&server));
    let err = service
        .cancel_visit(&CancellationRequest { booking_id: 7 })
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::Remote(_)));
}
