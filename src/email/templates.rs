//! Subjects and HTML bodies of the two outbound emails.
//!
//! Values are interpolated as-is. Nothing is HTML-escaped, so markup in a
//! submission reaches the rendered email unchanged.

/// Language used for both emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    English,
    Polish,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Polish => "pl",
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "pl" => Ok(Self::Polish),
            other => Err(format!(
                "{} is not a supported locale. Use either 'en' or 'pl'.",
                other
            )),
        }
    }
}

/// Fields listed in the administrator notification.
pub struct NotificationContent<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub topic: &'a str,
    pub message: &'a str,
}

/// Fields echoed back to the submitter.
pub struct ConfirmationContent<'a> {
    pub name: &'a str,
    pub topic: &'a str,
    pub message: &'a str,
}

pub fn notification_subject(locale: Locale, topic: &str) -> String {
    match locale {
        Locale::English => format!("New contact form submission: {}", topic),
        Locale::Polish => format!("Nowa wiadomość z formularza kontaktowego: {}", topic),
    }
}

pub fn notification_html(locale: Locale, content: &NotificationContent<'_>) -> String {
    let labels = match locale {
        Locale::English => [
            "New contact form submission",
            "Name",
            "Email",
            "Phone",
            "Topic",
            "Message",
        ],
        Locale::Polish => [
            "Nowa wiadomość z formularza kontaktowego",
            "Imię i nazwisko",
            "Email",
            "Telefon",
            "Temat",
            "Wiadomość",
        ],
    };
    let [heading, name, email, phone, topic, message] = labels;
    format!(
        r#"
<h2>{heading}</h2>
<p><strong>{name}:</strong> {name_value}</p>
<p><strong>{email}:</strong> {email_value}</p>
<p><strong>{phone}:</strong> {phone_value}</p>
<p><strong>{topic}:</strong> {topic_value}</p>
<p><strong>{message}:</strong></p>
<p>{message_value}</p>
"#,
        heading = heading,
        name = name,
        name_value = content.name,
        email = email,
        email_value = content.email,
        phone = phone,
        phone_value = content.phone,
        topic = topic,
        topic_value = content.topic,
        message = message,
        message_value = content.message,
    )
}

pub fn confirmation_subject(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Thank you for contacting Specroll",
        Locale::Polish => "Dziękujemy za kontakt ze Specroll",
    }
}

pub fn confirmation_html(locale: Locale, content: &ConfirmationContent<'_>) -> String {
    match locale {
        Locale::English => english_confirmation(content),
        Locale::Polish => polish_confirmation(content),
    }
}

fn english_confirmation(content: &ConfirmationContent<'_>) -> String {
    format!(
        r#"
<h2>Thank you for contacting Specroll</h2>
<p>Dear {name},</p>
<p>We have received your message and will get back to you as soon as possible.</p>
<p>Here's a summary of your inquiry:</p>
<p><strong>Topic:</strong> {topic}</p>
<p><strong>Message:</strong></p>
<p>{message}</p>
<br>
<p>Best regards,</p>
<p>Specroll Team</p>
"#,
        name = content.name,
        topic = content.topic,
        message = content.message,
    )
}

fn polish_confirmation(content: &ConfirmationContent<'_>) -> String {
    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #ffffff; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1);">
    <div style="text-align: center; padding: 20px 0; background-color: #f8f9fa; border-radius: 5px;">
        <h1 style="color: #333; margin: 0; font-size: 24px;">Dziękujemy za kontakt ze Specroll</h1>
    </div>
    <div style="padding: 20px 0;">
        <p style="color: #444; font-size: 16px; line-height: 1.6;">Szanowny/a <strong>{name}</strong>,</p>
        <p style="color: #444; font-size: 16px; line-height: 1.6;">
            Dziękujemy za przesłanie formularza kontaktowego. Potwierdzamy otrzymanie Twojej wiadomości i zapewniamy, że skontaktujemy się z Tobą tak szybko, jak to możliwe.
        </p>
        <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin: 20px 0;">
            <h3 style="color: #333; margin-top: 0;">Podsumowanie Twojego zapytania:</h3>
            <p style="margin: 10px 0;"><strong style="color: #555;">Temat:</strong> {topic}</p>
            <p style="margin: 10px 0;"><strong style="color: #555;">Wiadomość:</strong></p>
            <p style="color: #666; background-color: #fff; padding: 10px; border-radius: 3px; margin: 5px 0;">{message}</p>
        </div>
        <p style="color: #444; font-size: 16px; line-height: 1.6;">
            W przypadku jakichkolwiek dodatkowych pytań, prosimy o kontakt zwrotny na ten adres email.
        </p>
    </div>
    <div style="border-top: 2px solid #f8f9fa; padding-top: 20px; margin-top: 20px;">
        <p style="color: #444; margin: 5px 0;">Z poważaniem,</p>
        <p style="color: #333; font-weight: bold; margin: 5px 0;">Zespół Specroll</p>
    </div>
{footer}
</div>
"#,
        name = content.name,
        topic = content.topic,
        message = content.message,
        footer = POLISH_FOOTER,
    )
}

const POLISH_FOOTER: &str = r#"    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 5px; margin-top: 20px;">
        <div style="text-align: center; margin-bottom: 15px;">
            <a href="https://www.specroll.pl" style="color: #007bff; text-decoration: none; font-weight: bold;">www.specroll.pl</a>
        </div>
        <div style="display: flex; justify-content: space-between; flex-wrap: wrap;">
            <div style="flex: 1; min-width: 250px; margin: 10px;">
                <h4 style="color: #333; margin: 0 0 10px 0;">Kontakt</h4>
                <p style="color: #666; margin: 5px 0;">
                    <strong>Tel:</strong> +48 666 088 953<br>
                    <strong>Tel:</strong> +48 694 749 815<br>
                    <strong>NIP:</strong> 8863018777<br>
                    <strong>REGON:</strong> 520410221
                </p>
            </div>
            <div style="flex: 1; min-width: 250px; margin: 10px;">
                <h4 style="color: #333; margin: 0 0 10px 0;">Godziny otwarcia</h4>
                <p style="color: #666; margin: 5px 0;">
                    <strong>Poniedziałek - Piątek:</strong> 9:00 - 17:00<br>
                    <strong>Sobota:</strong> 10:00 - 14:00<br>
                    <strong>Niedziela:</strong> Zamknięte
                </p>
            </div>
        </div>
        <div style="text-align: center; margin-top: 15px;">
            <p style="color: #666; margin: 5px 0;">
                <a href="https://www.specroll.pl/produkty" style="color: #007bff; text-decoration: none; margin: 0 10px;">Produkty</a> |
                <a href="https://www.specroll.pl/uslugi" style="color: #007bff; text-decoration: none; margin: 0 10px;">Usługi</a> |
                <a href="https://www.specroll.pl/realizacje" style="color: #007bff; text-decoration: none; margin: 0 10px;">Realizacje</a> |
                <a href="https://www.specroll.pl/kontakt" style="color: #007bff; text-decoration: none; margin: 0 10px;">Kontakt</a>
            </p>
        </div>
    </div>"#;
