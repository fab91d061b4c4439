use crate::email::templates::{self, ConfirmationContent, Locale, NotificationContent};
use crate::email::{EmailClient, Envelope};
use std::sync::Arc;

/// Renders the confirmation and notification emails and hands them to the
/// mail session.
///
/// Built once at startup and shared read-only between requests.
pub struct MailDispatcher {
    email_client: Arc<dyn EmailClient>,
    sender: String,
    locale: Locale,
    verify_before_send: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Confirmation,
    Notification,
}

impl std::fmt::Display for EmailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailKind::Confirmation => f.write_str("confirmation"),
            EmailKind::Notification => f.write_str("notification"),
        }
    }
}

#[derive(thiserror::Error)]
pub enum DeliveryError {
    #[error("SMTP connection verification failed before sending the {0} email")]
    Verification(EmailKind, #[source] anyhow::Error),
    #[error("Failed to send the {0} email")]
    Send(EmailKind, #[source] anyhow::Error),
}

impl DeliveryError {
    pub fn kind(&self) -> EmailKind {
        match self {
            DeliveryError::Verification(kind, _) | DeliveryError::Send(kind, _) => *kind,
        }
    }

    /// The underlying cause, for the operator reading the response.
    pub fn details(&self) -> String {
        match self {
            DeliveryError::Verification(_, e) | DeliveryError::Send(_, e) => format!("{:#}", e),
        }
    }
}

impl std::fmt::Debug for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::routes::error_chain_fmt(self, f)
    }
}

impl MailDispatcher {
    pub fn new(
        email_client: Arc<dyn EmailClient>,
        sender: String,
        locale: Locale,
        verify_before_send: bool,
    ) -> Self {
        Self {
            email_client,
            sender,
            locale,
            verify_before_send,
        }
    }

    #[tracing::instrument(
        name = "Sending confirmation email",
        skip(self, name, topic, message),
        fields(locale = self.locale.as_str())
    )]
    pub async fn send_confirmation(
        &self,
        recipient: &str,
        name: &str,
        topic: &str,
        message: &str,
    ) -> Result<(), DeliveryError> {
        let content = ConfirmationContent {
            name,
            topic,
            message,
        };
        let envelope = Envelope {
            from: self.sender.clone(),
            to: vec![recipient.to_owned()],
            subject: templates::confirmation_subject(self.locale).to_owned(),
            html_body: templates::confirmation_html(self.locale, &content),
        };
        self.deliver(EmailKind::Confirmation, &envelope).await
    }

    #[tracing::instrument(
        name = "Sending notification email",
        skip(self, recipients, name, email, phone, message),
        fields(locale = self.locale.as_str(), recipients = %recipients.join(", "))
    )]
    pub async fn send_notification(
        &self,
        recipients: &[String],
        name: &str,
        email: &str,
        phone: &str,
        topic: &str,
        message: &str,
    ) -> Result<(), DeliveryError> {
        let content = NotificationContent {
            name,
            email,
            phone,
            topic,
            message,
        };
        let envelope = Envelope {
            from: self.sender.clone(),
            to: recipients.to_vec(),
            subject: templates::notification_subject(self.locale, topic),
            html_body: templates::notification_html(self.locale, &content),
        };
        self.deliver(EmailKind::Notification, &envelope).await
    }

    async fn deliver(&self, kind: EmailKind, envelope: &Envelope) -> Result<(), DeliveryError> {
        if self.verify_before_send {
            self.email_client
                .verify()
                .await
                .map_err(|e| DeliveryError::Verification(kind, e))?;
            tracing::info!("SMTP connection verified successfully");
        }
        self.email_client
            .send_email(envelope)
            .await
            .map_err(|e| DeliveryError::Send(kind, e))?;
        tracing::info!(to = %envelope.to.join(", "), "{} email sent successfully", kind);
        Ok(())
    }
}
