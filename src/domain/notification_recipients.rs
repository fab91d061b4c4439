use validator::validate_email;

/// Administrator addresses that receive every notification.
///
/// Parsed from a comma-separated list. Each entry is trimmed and empty
/// entries are skipped; order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecipients(Vec<String>);

impl NotificationRecipients {
    pub fn parse(s: &str) -> Result<NotificationRecipients, String> {
        let recipients: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();

        if recipients.is_empty() {
            return Err("The recipient list is empty.".into());
        }
        if let Some(invalid) = recipients.iter().find(|r| !validate_email(r.as_str())) {
            return Err(format!("{} is not a valid recipient email.", invalid));
        }
        Ok(Self(recipients))
    }
}

impl AsRef<[String]> for NotificationRecipients {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for NotificationRecipients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
