mod smtp_email_client;
pub mod templates;

use async_trait::async_trait;
pub use smtp_email_client::SmtpEmailClient;

/// One outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

/// The mail session: an authenticated channel to a submission relay.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Deliver `envelope` as a single message to all of its recipients.
    async fn send_email(&self, envelope: &Envelope) -> Result<(), anyhow::Error>;

    /// Check that the relay is reachable and accepts our credentials.
    async fn verify(&self) -> Result<(), anyhow::Error>;
}
