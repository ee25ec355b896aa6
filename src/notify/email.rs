use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
};

use crate::{
    config::Config,
    core::IdxError,
    matcher::MatchResult,
    notify::{
        NotifyFuture, NotifyOutcome, Notifier,
        render::{render_html, render_subject},
    },
};

/// Display name on the `From` header.
const SENDER_NAME: &str = "IDX Bot";

/// Sends the alert through an authenticated SMTP session upgraded with STARTTLS.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    sender: Option<String>,
    password: Option<String>,
    recipient: Option<String>,
    smtp_host: String,
    smtp_port: u16,
    window_minutes: i64,
}

impl EmailNotifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sender: config.sender.clone(),
            password: config.password.clone(),
            recipient: config.recipient.clone(),
            smtp_host: config.smtp_host.clone(),
            smtp_port: config.smtp_port,
            window_minutes: config.window_minutes,
        }
    }

    /// Assembles the multipart message with a single HTML part.
    ///
    /// # Errors
    ///
    /// Fails if the sender or recipient is not a valid address, or the
    /// message cannot be built.
    pub fn build_message(&self, sender: &str, matches: &[MatchResult]) -> Result<Message, IdxError> {
        let from = Mailbox::new(Some(SENDER_NAME.to_string()), sender.parse()?);
        let to: Mailbox = self.recipient.as_deref().unwrap_or_default().parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(render_subject(matches.len()))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(render_html(matches, self.window_minutes))),
            )?;
        Ok(message)
    }

    async fn send(&self, matches: &[MatchResult]) -> Result<NotifyOutcome, IdxError> {
        let (Some(sender), Some(password)) = (self.sender.as_deref(), self.password.as_deref())
        else {
            tracing::info!("email credentials not set, skipping alert");
            return Ok(NotifyOutcome::Skipped);
        };

        let message = self.build_message(sender, matches)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        transport.send(message).await?;
        tracing::info!(matches = matches.len(), "alert email sent");
        Ok(NotifyOutcome::Sent)
    }
}

impl Notifier for EmailNotifier {
    fn notify<'a>(&'a self, matches: &'a [MatchResult]) -> NotifyFuture<'a> {
        Box::pin(self.send(matches))
    }
}
