mod contact_submission;
mod notification_recipients;

pub use contact_submission::{ContactSubmission, ValidationError};
pub use notification_recipients::NotificationRecipients;
