use crate::dispatcher::{DeliveryError, MailDispatcher};
use crate::domain::{ContactSubmission, NotificationRecipients, ValidationError};
use crate::routes::error_chain_fmt;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::{json, Json};
use rocket::{Request, State};
use uuid::Uuid;

/// Request body. Every field is optional here so that an absent field is
/// reported as a validation failure instead of a malformed body.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    topic: Option<String>,
    message: Option<String>,
}

#[derive(serde::Serialize)]
pub struct ContactResponse {
    message: &'static str,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        ContactSubmission::parse(form.name, form.email, form.phone, form.topic, form.message)
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Failed to send emails")]
    DeliveryError(#[from] DeliveryError),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for ContactError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        let (status, body) = match &self {
            ContactError::ValidationError(e) => {
                tracing::info!(missing_fields = ?e.missing_fields, "Rejected contact submission");
                (Status::BadRequest, json!({ "error": e.to_string() }))
            }
            ContactError::DeliveryError(e) => {
                tracing::error!(error.cause_chain = ?self, "Error sending emails");
                (
                    Status::BadGateway,
                    json!({ "error": self.to_string(), "details": e.details() }),
                )
            }
        };
        (status, Json(body)).respond_to(request)
    }
}

#[post("/api/contact", data = "<form>")]
pub async fn submit_contact(
    form: Json<ContactForm>,
    dispatcher: &State<MailDispatcher>,
    recipients: &State<NotificationRecipients>,
) -> Result<Json<ContactResponse>, ContactError> {
    handle_contact_form(form.into_inner(), dispatcher, recipients).await
}

#[post("/email/contact", data = "<form>")]
pub async fn submit_email_contact(
    form: Json<ContactForm>,
    dispatcher: &State<MailDispatcher>,
    recipients: &State<NotificationRecipients>,
) -> Result<Json<ContactResponse>, ContactError> {
    handle_contact_form(form.into_inner(), dispatcher, recipients).await
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, dispatcher, recipients),
    fields(
        request_id = %Uuid::new_v4(),
        submitter_email = ?form.email,
        topic = ?form.topic
    )
)]
async fn handle_contact_form(
    form: ContactForm,
    dispatcher: &MailDispatcher,
    recipients: &NotificationRecipients,
) -> Result<Json<ContactResponse>, ContactError> {
    let submission: ContactSubmission = form.try_into()?;
    send_emails(dispatcher, recipients, &submission).await?;
    Ok(Json(ContactResponse {
        message: "Emails sent successfully",
    }))
}

/// Confirmation first; the notification is only attempted once the
/// submitter's copy went out.
async fn send_emails(
    dispatcher: &MailDispatcher,
    recipients: &NotificationRecipients,
    submission: &ContactSubmission,
) -> Result<(), DeliveryError> {
    tracing::info!("Sending confirmation email to {}", submission.email);
    dispatcher
        .send_confirmation(
            &submission.email,
            &submission.name,
            &submission.topic,
            &submission.message,
        )
        .await?;

    tracing::info!("Sending notification email to {}", recipients);
    dispatcher
        .send_notification(
            recipients.as_ref(),
            &submission.name,
            &submission.email,
            &submission.phone,
            &submission.topic,
            &submission.message,
        )
        .await
}
