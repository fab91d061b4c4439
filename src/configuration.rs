use crate::domain::NotificationRecipients;
use crate::email::templates::Locale;
use lettre::message::Mailbox;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    pub port: Option<u16>,
    pub host: IpAddr,
}

/// Everything needed to open the authenticated mail session.
#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Implicit TLS from the first byte (usually port 465).
    pub secure: bool,
    /// Only consulted when `secure` is off: demand STARTTLS instead of
    /// talking plain text to the relay.
    #[serde(default = "default_require_tls")]
    pub require_tls: bool,
    pub username: String,
    pub password: Secret<String>,
    pub sender_email: String,
    /// Comma-separated administrator addresses.
    pub recipients: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    #[serde(default)]
    pub verify_before_send: bool,
    #[serde(default)]
    pub locale: Locale,
}

fn default_require_tls() -> bool {
    true
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Failed to determine the configuration directory: {0}")]
    Directory(#[from] std::io::Error),
    #[error("{0}")]
    Environment(String),
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),
    #[error("Invalid configuration value for {setting}: {reason}")]
    Invalid {
        setting: &'static str,
        reason: String,
    },
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Mailbox, String> {
        self.sender_email
            .parse::<Mailbox>()
            .map_err(|e| format!("{} is not a valid sender: {}", self.sender_email, e))
    }

    pub fn recipients(&self) -> Result<NotificationRecipients, String> {
        NotificationRecipients::parse(&self.recipients)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// Reject settings that would only fail once the first request arrives.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            ("email_client.host", self.host.as_str()),
            ("email_client.username", self.username.as_str()),
            ("email_client.password", self.password.expose_secret().as_str()),
            ("email_client.sender_email", self.sender_email.as_str()),
            ("email_client.recipients", self.recipients.as_str()),
        ];
        if let Some((setting, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigurationError::Missing(*setting));
        }
        if self.port == 0 {
            return Err(ConfigurationError::Invalid {
                setting: "email_client.port",
                reason: "the port must not be 0".into(),
            });
        }
        if self.timeout_milliseconds == 0 {
            return Err(ConfigurationError::Invalid {
                setting: "email_client.timeout_milliseconds",
                reason: "the timeout must be positive".into(),
            });
        }
        self.sender()
            .map_err(|reason| ConfigurationError::Invalid {
                setting: "email_client.sender_email",
                reason,
            })?;
        self.recipients()
            .map_err(|reason| ConfigurationError::Invalid {
                setting: "email_client.recipients",
                reason,
            })?;
        Ok(())
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}

/// Layer `configuration/base`, `configuration/{APP_ENVIRONMENT}` and `APP_*`
/// environment variables, then validate the mail session settings.
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::Environment)?;

    let mut settings = config::Config::default();
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    let settings: Settings = settings.try_into()?;
    settings.email_client.validate()?;
    Ok(settings)
}
