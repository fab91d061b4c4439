use contact_relay::configuration::get_configuration;
use contact_relay::email::SmtpEmailClient;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("contact_relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().map_err(|e| {
        tracing::error!(error = %e, "Refusing to start with an invalid configuration");
        e
    })?;
    let email_client = SmtpEmailClient::new(&configuration.email_client)?;

    let application = Application::build(&configuration, Arc::new(email_client)).await?;
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Server error");
        e
    })
}
