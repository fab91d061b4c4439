use crate::configuration::EmailClientSettings;
use crate::email::{EmailClient, Envelope};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use std::time::Duration;

/// lettre only bounds the TCP connect with its own timeout, so every
/// exchange with the relay is additionally capped by `timeout`.
pub struct SmtpEmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpEmailClient {
    pub fn new(settings: &EmailClientSettings) -> Result<Self, anyhow::Error> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .context("Failed to set up a TLS connection to the SMTP relay.")?
        } else if settings.require_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .context("Failed to set up a STARTTLS connection to the SMTP relay.")?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.expose_secret().clone(),
            ))
            .timeout(Some(settings.timeout()))
            .build();

        tracing::info!(
            smtp.host = %settings.host,
            smtp.port = settings.port,
            smtp.user = %settings.username,
            smtp.secure = settings.secure,
            "Initialized SMTP transport"
        );
        Ok(Self {
            transport,
            timeout: settings.timeout(),
        })
    }
}

fn build_message(envelope: &Envelope) -> Result<Message, anyhow::Error> {
    let from: Mailbox = envelope
        .from
        .parse()
        .with_context(|| format!("{} is not a valid sender address.", envelope.from))?;
    let mut builder = Message::builder()
        .from(from)
        .subject(&envelope.subject)
        .header(ContentType::TEXT_HTML);
    for to in &envelope.to {
        let mailbox: Mailbox = to
            .parse()
            .with_context(|| format!("{} is not a valid recipient address.", to))?;
        builder = builder.to(mailbox);
    }
    builder
        .body(envelope.html_body.clone())
        .context("Failed to build the email message.")
}

#[async_trait]
impl EmailClient for SmtpEmailClient {
    async fn send_email(&self, envelope: &Envelope) -> Result<(), anyhow::Error> {
        let message = build_message(envelope)?;
        tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| anyhow!("The SMTP relay did not respond within {:?}.", self.timeout))?
            .context("The SMTP relay did not accept the message.")?;
        Ok(())
    }

    async fn verify(&self) -> Result<(), anyhow::Error> {
        let connected = tokio::time::timeout(self.timeout, self.transport.test_connection())
            .await
            .map_err(|_| anyhow!("The SMTP relay did not respond within {:?}.", self.timeout))?
            .context("Failed to connect to the SMTP relay.")?;
        if !connected {
            return Err(anyhow!("The SMTP relay rejected the connection test."));
        }
        Ok(())
    }
}
