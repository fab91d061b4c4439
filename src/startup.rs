use crate::catchers::*;
use crate::configuration::Settings;
use crate::cors::Cors;
use crate::dispatcher::MailDispatcher;
use crate::email::EmailClient;
use crate::port_saver;
use crate::port_saver::Port;
use crate::routes::*;
use anyhow::anyhow;
use rocket::{Config, Ignite, Rocket};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: Port,
}

impl Application {
    /// Wire the mail dispatcher into a ready-to-launch Rocket instance.
    ///
    /// A configured port of `None` binds a random free port; `port` reports
    /// it after liftoff.
    pub async fn build(
        configuration: &Settings,
        email_client: Arc<dyn EmailClient>,
    ) -> Result<Application, anyhow::Error> {
        let email_settings = &configuration.email_client;
        let sender = email_settings.sender().map_err(|e| anyhow!(e))?;
        let recipients = email_settings.recipients().map_err(|e| anyhow!(e))?;
        let dispatcher = MailDispatcher::new(
            email_client,
            sender.to_string(),
            email_settings.locale,
            email_settings.verify_before_send,
        );

        let (port_saver, port) = port_saver::create_pair();
        let server = rocket::custom(Config {
            address: configuration.application.host,
            port: configuration.application.port.unwrap_or(0),
            ..Config::debug_default()
        })
        .attach(port_saver)
        .attach(Cors)
        .manage(dispatcher)
        .manage(recipients)
        .mount(
            "/",
            routes![index, health_check, submit_contact, submit_email_contact],
        )
        .register(
            "/",
            catchers![
                unprocessable_entity_to_bad_request,
                bad_request,
                not_found,
                internal_server_error
            ],
        )
        .ignite()
        .await
        .map_err(|e| anyhow!("Failed to ignite the server: {}", e))?;

        Ok(Application { server, port })
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server
            .launch()
            .await
            .map(|_| ())
            .map_err(|e| anyhow!("The server stopped unexpectedly: {}", e))
    }
}
