use anyhow::anyhow;
use async_trait::async_trait;
use contact_relay::configuration::{get_configuration, Settings};
use contact_relay::email::{EmailClient, Envelope};
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Stand-in for the SMTP relay. Every attempted envelope is recorded, the
/// failed ones included.
#[derive(Default)]
pub struct MockEmailClient {
    pub sent_emails: Mutex<Vec<Envelope>>,
    pub verifications: AtomicUsize,
    /// 1-based index of the send attempt that fails.
    fail_on_attempt: Option<usize>,
    fail_verification: bool,
}

impl MockEmailClient {
    pub fn failing_on_attempt(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Default::default()
        }
    }

    pub fn failing_verification() -> Self {
        Self {
            fail_verification: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, envelope: &Envelope) -> Result<(), anyhow::Error> {
        let attempt = {
            let mut sent = self.sent_emails.lock().unwrap();
            sent.push(envelope.clone());
            sent.len()
        };
        if self.fail_on_attempt == Some(attempt) {
            return Err(anyhow!("Connection refused (os error 111)"));
        }
        Ok(())
    }

    async fn verify(&self) -> Result<(), anyhow::Error> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        if self.fail_verification {
            return Err(anyhow!("Invalid login: 535 Authentication failed"));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub email_client: Arc<MockEmailClient>,
    pub recipients: Vec<String>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/contact", body).await
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn sent_emails(&self) -> Vec<Envelope> {
        self.email_client.sent_emails.lock().unwrap().clone()
    }
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Jan Kowalski",
        "email": "jan@example.com",
        "phone": "123456789",
        "topic": "Pricing",
        "message": "Hello"
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockEmailClient::default(), |_| {}).await
}

pub async fn spawn_app_with(
    email_client: MockEmailClient,
    customise: impl FnOnce(&mut Settings),
) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = None;
        c.email_client.recipients = "admin@specroll.pl, office@specroll.pl".into();
        customise(&mut c);
        c
    };

    let email_client = Arc::new(email_client);
    let application = Application::build(&configuration, email_client.clone())
        .await
        .expect("Failed to build application.");
    let mut port = application.port;
    let _ = tokio::spawn(application.server.launch());

    TestApp {
        address: format!(
            "http://127.0.0.1:{}",
            port.get().await.expect("The server did not report a port.")
        ),
        email_client,
        recipients: vec!["admin@specroll.pl".into(), "office@specroll.pl".into()],
        api_client: reqwest::Client::new(),
    }
}
