//! Contact notifications.
//!
//! A contact request is validated, then turned into two messages sent
//! through a [`Mailer`]:
//!
//! 1. an acknowledgment to the person who wrote in, and
//! 2. an alert to the site owner, with `Reply-To` set to the requester.
//!
//! The acknowledgment decides the outcome: if it fails, the request fails.
//! The owner alert is best effort; a failure is logged and the request still
//! succeeds, since the requester already has their confirmation.
//!
//! Nothing is retried.

use crate::config::SiteConfig;
use async_trait::async_trait;
use maud::html;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted message, counted in characters.
pub const MAX_MESSAGE_CHARS: usize = 160;

/// Request body as received. Every field is optional here so that a missing
/// field is reported by [`EmailRequestBody::validate`] rather than by the
/// JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub is_recruiter: Option<bool>,
    pub case_study_slug: Option<String>,
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_recruiter: bool,
    pub case_study_slug: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Message must be at most 160 characters (got {0})")]
    MessageTooLong(usize),
}

impl EmailRequestBody {
    pub fn validate(self) -> Result<EmailRequest, ValidationError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let message = present(self.message, "message")?;
        let case_study_slug = required(self.case_study_slug, "caseStudySlug")?;

        if !looks_like_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        let length = message.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooLong(length));
        }

        Ok(EmailRequest {
            name,
            email,
            message,
            is_recruiter: self.is_recruiter.unwrap_or(false),
            case_study_slug,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    present(value, field).map(|v| v.trim().to_string())
}

/// Like [`required`], but keeps the value as sent.
fn present(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// One `@` with something on both sides and a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

// ============================================================================
// Outbound mail
// ============================================================================

/// A message in the shape the transactional email API accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email API returned {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Sends a single message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

/// [`Mailer`] backed by the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// ============================================================================
// Notification policy
// ============================================================================

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Email is not configured: {0}")]
    Configuration(String),
    #[error("Failed to send acknowledgment: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Send the acknowledgment and the owner alert for a validated request.
///
/// `mailer` is `None` when no API key was provided.
pub async fn notify(
    mailer: Option<&dyn Mailer>,
    config: &SiteConfig,
    request: &EmailRequest,
) -> Result<(), NotifyError> {
    let Some(mailer) = mailer else {
        tracing::error!("contact request rejected: no email API key configured");
        return Err(NotifyError::Configuration("missing API key".into()));
    };
    if config.email.owner_address.trim().is_empty() {
        tracing::error!("contact request rejected: email.owner_address is empty");
        return Err(NotifyError::Configuration("missing owner address".into()));
    }

    let ack = acknowledgment(config, request);
    if let Err(e) = mailer.send(&ack).await {
        tracing::error!(error = %e, slug = %request.case_study_slug, "acknowledgment send failed");
        return Err(NotifyError::Delivery(e));
    }

    let alert = owner_alert(config, request);
    if let Err(e) = mailer.send(&alert).await {
        tracing::warn!(error = %e, slug = %request.case_study_slug, "owner alert send failed");
    }

    tracing::info!(
        slug = %request.case_study_slug,
        recruiter = request.is_recruiter,
        "contact request delivered"
    );
    Ok(())
}

/// Confirmation sent to the requester.
pub fn acknowledgment(config: &SiteConfig, request: &EmailRequest) -> OutgoingEmail {
    let body = html! {
        p { "Hi " (request.name) "," }
        p { "Thanks for reaching out. I received your message and will reply soon." }
        blockquote { (request.message) }
        p { (config.site.owner) }
    };
    OutgoingEmail {
        from: config.email.from.clone(),
        to: vec![request.email.clone()],
        subject: format!("Thanks for your message, {}", request.name),
        html: body.into_string(),
        reply_to: None,
    }
}

/// Alert sent to the site owner.
pub fn owner_alert(config: &SiteConfig, request: &EmailRequest) -> OutgoingEmail {
    let kind = if request.is_recruiter {
        "recruiter"
    } else {
        "visitor"
    };
    let body = html! {
        h2 { "New contact request" }
        table {
            tr { th { "Name" } td { (request.name) } }
            tr { th { "Email" } td { (request.email) } }
            tr { th { "Type" } td { (kind) } }
            tr { th { "Case study" } td { (request.case_study_slug) } }
        }
        blockquote { (request.message) }
    };
    OutgoingEmail {
        from: config.email.from.clone(),
        to: vec![config.email.owner_address.clone()],
        subject: format!("New {kind} message from {}", request.name),
        html: body.into_string(),
        reply_to: Some(request.email.clone()),
    }
}
