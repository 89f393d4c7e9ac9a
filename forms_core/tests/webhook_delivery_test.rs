use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use forms_core::{
    forms::{FailurePolicy, FormKind, FormSession, HttpWebhookTransport, SubmissionController},
    SubmissionStatus,
};
use parking_lot::Mutex;
use std::{net::SocketAddr, sync::Arc, time::Duration};

#[derive(Clone)]
struct Webhook {
    status: StatusCode,
    delay: Duration,
    received: Arc<Mutex<Vec<(Option<String>, String)>>>,
}

async fn receive(State(hook): State<Webhook>, headers: HeaderMap, body: String) -> StatusCode {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    hook.received.lock().push((content_type, body));
    tokio::time::sleep(hook.delay).await;
    hook.status
}

async fn spawn_webhook(status: StatusCode, delay: Duration) -> (String, Webhook) {
    let hook = Webhook {
        status,
        delay,
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/webhook/forms", post(receive))
        .with_state(hook.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/webhook/forms", addr), hook)
}

async fn reject_with_error_page() -> (StatusCode, String) {
    (StatusCode::BAD_GATEWAY, "<p>upstream unavailable</p>".repeat(40_000))
}

async fn spawn_rejecting_webhook() -> String {
    let app = Router::new().route("/webhook/forms", post(reject_with_error_page));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/webhook/forms", addr)
}

async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/webhook/forms", addr)
}

fn controller(kind: FormKind, url: &str, timeout: Duration) -> SubmissionController {
    let transport = HttpWebhookTransport::new(url, timeout).unwrap();
    let policy = match kind {
        FormKind::Contact => FailurePolicy::contact(),
        FormKind::Reservation => FailurePolicy::reservation(),
    };
    SubmissionController::new(kind, Arc::new(transport), policy)
}

fn contact_session() -> FormSession {
    let session = FormSession::new(FormKind::Contact);
    session.set("name", "Zeynep Kaya").unwrap();
    session.set("email", "zeynep@example.com").unwrap();
    session.set("subject", "Implant").unwrap();
    session.set("message", "Fiyat bilgisi alabilir miyim?").unwrap();
    session
}

fn reservation_session() -> FormSession {
    let session = FormSession::new(FormKind::Reservation);
    session.set("name", "John Smith").unwrap();
    session.set("email", "john@example.com").unwrap();
    session.set("phone", "+44 20 7946 0000").unwrap();
    session.set("service", "aesthetic").unwrap();
    session.set("date", "2026-11-20").unwrap();
    session.set("message", "Botox consultation, mornings preferred").unwrap();
    session
}

#[tokio::test]
async fn test_contact_form_is_posted_as_json() {
    let (url, hook) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let controller = controller(FormKind::Contact, &url, Duration::from_secs(5));
    let session = contact_session();

    let outcome = controller.submit(&session).await.unwrap();

    assert_eq!(outcome.status, SubmissionStatus::Success);
    assert_eq!(outcome.webhook_status, Some(200));
    assert!(session.payload().is_blank());

    let received = hook.received.lock().clone();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Zeynep Kaya",
            "email": "zeynep@example.com",
            "subject": "Implant",
            "message": "Fiyat bilgisi alabilir miyim?"
        })
    );
}

#[tokio::test]
async fn test_reservation_body_carries_every_field() {
    let (url, hook) = spawn_webhook(StatusCode::NO_CONTENT, Duration::ZERO).await;
    let controller = controller(FormKind::Reservation, &url, Duration::from_secs(5));

    let outcome = controller.submit(&reservation_session()).await.unwrap();
    assert_eq!(outcome.status, SubmissionStatus::Success);

    let body: serde_json::Value =
        serde_json::from_str(&hook.received.lock()[0].1).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "John Smith",
            "email": "john@example.com",
            "phone": "+44 20 7946 0000",
            "service": "aesthetic",
            "date": "2026-11-20",
            "message": "Botox consultation, mornings preferred"
        })
    );
}

#[tokio::test]
async fn test_server_error_differs_by_form() {
    let (url, hook) = spawn_webhook(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;

    let contact = controller(FormKind::Contact, &url, Duration::from_secs(5));
    let outcome = contact.submit(&contact_session()).await.unwrap();
    assert_eq!(outcome.status, SubmissionStatus::Error);
    assert_eq!(
        outcome.debug_info.unwrap().as_str(),
        "500 Internal Server Error"
    );

    let reservation = controller(FormKind::Reservation, &url, Duration::from_secs(5));
    let outcome = reservation.submit(&reservation_session()).await.unwrap();
    assert_eq!(outcome.status, SubmissionStatus::Success);
    assert_eq!(outcome.masked_failure.as_deref(), Some("500 Internal Server Error"));

    assert_eq!(hook.received.lock().len(), 2);
}

#[tokio::test]
async fn test_rejection_is_described_by_status_line_only() {
    let url = spawn_rejecting_webhook().await;
    let contact = controller(FormKind::Contact, &url, Duration::from_secs(5));

    let outcome = contact.submit(&contact_session()).await.unwrap();

    assert_eq!(outcome.status, SubmissionStatus::Error);
    assert_eq!(outcome.webhook_status, Some(502));
    assert_eq!(outcome.debug_info.unwrap().as_str(), "502 Bad Gateway");
}

#[tokio::test]
async fn test_unreachable_webhook_is_reported_as_success() {
    let url = closed_port_url().await;

    for kind in FormKind::ALL {
        let controller = controller(kind, &url, Duration::from_secs(5));
        let session = match kind {
            FormKind::Contact => contact_session(),
            FormKind::Reservation => reservation_session(),
        };

        let outcome = controller.submit(&session).await.unwrap();

        assert_eq!(outcome.status, SubmissionStatus::Success, "{}", kind);
        assert!(outcome.masked_failure.is_some());
        assert!(outcome.webhook_status.is_none());
        assert!(session.payload().is_blank());
    }
}

#[tokio::test]
async fn test_slow_webhook_times_out() {
    let (url, _hook) = spawn_webhook(StatusCode::OK, Duration::from_secs(3)).await;
    let transport = HttpWebhookTransport::new(&url, Duration::from_millis(200)).unwrap();
    let controller = SubmissionController::new(
        FormKind::Contact,
        Arc::new(transport),
        FailurePolicy::strict(),
    );

    let outcome = controller.submit(&contact_session()).await.unwrap();

    assert_eq!(outcome.status, SubmissionStatus::Error);
    assert!(outcome.debug_info.unwrap().as_str().contains("timed out"));
}
