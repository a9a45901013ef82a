use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use lettre::{transport::smtp::authentication::Credentials, Message, SmtpTransport, Transport};

use common::entities::letter::Letter;

lazy_static::lazy_static! {
    static ref MAIL_RELAY: String =
        std::env::var("MAIL_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string());
    static ref MAIL_ADDRESS: String = std::env::var("MAIL_ADDRESS").unwrap();
    static ref MAIL_PASSWORD: String = std::env::var("MAIL_PASSWORD").unwrap();
}

#[async_trait]
pub trait MailGateway {
    async fn send(&self, letter: &Letter) -> anyhow::Result<()>;
}

pub type MailerObject = Arc<dyn MailGateway + Send + Sync>;

/// Sends letters through the configured SMTP relay.
pub struct SmtpMailer;

impl SmtpMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SmtpMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailGateway for SmtpMailer {
    async fn send(&self, letter: &Letter) -> anyhow::Result<()> {
        let to = letter.email.parse()?;

        let Ok(email) = Message::builder()
            .from(MAIL_ADDRESS.parse()?)
            .to(to)
            .subject(letter.subject.clone())
            .body(letter.message.clone())
        else {
            bail!("Error building email");
        };

        let mailer = SmtpTransport::relay(MAIL_RELAY.as_str())?
            .credentials(Credentials::new(
                MAIL_ADDRESS.to_string(),
                MAIL_PASSWORD.to_string(),
            ))
            .build();

        if let Err(err) = mailer.send(&email) {
            bail!("Error sending email: {}", err);
        }

        log::info!("Mail sent to {}", letter.email);
        Ok(())
    }
}

/// Captures letters instead of sending them.
#[derive(Default)]
pub struct TestMailer {
    pub sent: Mutex<Vec<Letter>>,
}

impl TestMailer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MailGateway for TestMailer {
    async fn send(&self, letter: &Letter) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(letter.clone());
        Ok(())
    }
}
