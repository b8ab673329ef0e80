//! Notification email rendering and the outbound provider client.
//!
//! Rendering is pure string work and lives outside the `server` feature so
//! it can be unit tested without the async stack. The provider trait and the
//! Resend client only exist when the endpoint is compiled in.

use crate::contact::ContactForm;
use crate::error::{ShowreelError, ShowreelResult};

/// A fully rendered message, ready to hand to a [`MailProvider`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct Outgoing {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub to_email: String,
    pub from_email: String,
}

impl MailConfig {
    /// Reads `RESEND_API_KEY` and `CONTACT_TO_EMAIL` (both required) and
    /// `CONTACT_FROM_EMAIL` (defaults to the Resend onboarding sender).
    pub fn from_env() -> ShowreelResult<Self> {
        let api_key = require_env("RESEND_API_KEY")?;
        let to_email = require_env("CONTACT_TO_EMAIL")?;
        let from_email = std::env::var("CONTACT_FROM_EMAIL")
            .unwrap_or_else(|_| "onboarding@resend.dev".to_string());
        Ok(Self {
            api_key,
            to_email,
            from_email,
        })
    }

    pub fn outgoing(&self, form: &ContactForm) -> Outgoing {
        Outgoing {
            from: self.from_email.clone(),
            to: self.to_email.clone(),
            reply_to: form.email.trim().to_string(),
            subject: subject(form),
            html: render_notification(form),
        }
    }
}

fn require_env(key: &str) -> ShowreelResult<String> {
    std::env::var(key)
        .map_err(|_| ShowreelError::mail(format!("missing environment variable {key}")))
}

pub fn subject(form: &ContactForm) -> String {
    format!("New Contact Form Submission from {}", form.name.trim())
}

/// Escapes the characters that matter inside an HTML text node or a
/// double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Builds the HTML body of the notification email. All user-supplied fields
/// are escaped before interpolation.
pub fn render_notification(form: &ContactForm) -> String {
    let name = escape_html(form.name.trim());
    let email = escape_html(form.email.trim());
    let message = escape_html(form.message.trim());

    let company_block = match form.company.as_deref().map(str::trim) {
        Some(company) if !company.is_empty() => format!(
            "<p style=\"margin: 0 0 10px 0;\">\n  <strong style=\"color: #7b2cbf;\">Company:</strong><br/>\n  {}\n</p>\n",
            escape_html(company)
        ),
        _ => String::new(),
    };

    format!(
        "<div style=\"font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;\">\n\
         <h2 style=\"color: #00f5d4; border-bottom: 2px solid #00f5d4; padding-bottom: 10px;\">New Contact Form Submission</h2>\n\
         <div style=\"background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;\">\n\
         <p style=\"margin: 0 0 10px 0;\">\n  <strong style=\"color: #7b2cbf;\">Name:</strong><br/>\n  {name}\n</p>\n\
         <p style=\"margin: 0 0 10px 0;\">\n  <strong style=\"color: #7b2cbf;\">Email:</strong><br/>\n  <a href=\"mailto:{email}\" style=\"color: #00f5d4;\">{email}</a>\n</p>\n\
         {company_block}\
         <p style=\"margin: 0;\">\n  <strong style=\"color: #7b2cbf;\">Message:</strong><br/>\n  <span style=\"white-space: pre-wrap;\">{message}</span>\n</p>\n\
         </div>\n\
         <p style=\"color: #6c757d; font-size: 12px; margin-top: 20px;\">This email was sent from the showreel contact form.</p>\n\
         </div>\n"
    )
}

/// Transactional email backend. One shot per submission, no retries.
#[cfg(feature = "server")]
pub trait MailProvider: Send + Sync + 'static {
    /// Delivers `outgoing` and resolves to the provider's message id.
    fn send(
        &self,
        outgoing: &Outgoing,
    ) -> impl std::future::Future<Output = ShowreelResult<String>> + Send;
}

#[cfg(feature = "server")]
pub use resend::ResendClient;

#[cfg(feature = "server")]
mod resend {
    use super::{MailProvider, Outgoing};
    use crate::error::{ShowreelError, ShowreelResult};

    const SEND_URL: &str = "https://api.resend.com/emails";

    #[derive(serde::Serialize)]
    struct SendRequest<'a> {
        from: &'a str,
        to: &'a str,
        reply_to: &'a str,
        subject: &'a str,
        html: &'a str,
    }

    #[derive(serde::Deserialize)]
    struct SendResponse {
        id: String,
    }

    pub struct ResendClient {
        http: reqwest::Client,
        api_key: String,
    }

    impl ResendClient {
        pub fn new(api_key: impl Into<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                api_key: api_key.into(),
            }
        }
    }

    impl MailProvider for ResendClient {
        async fn send(&self, outgoing: &Outgoing) -> ShowreelResult<String> {
            let body = SendRequest {
                from: &outgoing.from,
                to: &outgoing.to,
                reply_to: &outgoing.reply_to,
                subject: &outgoing.subject,
                html: &outgoing.html,
            };
            let response = self
                .http
                .post(SEND_URL)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| ShowreelError::mail(format!("request failed: {e}")))?;
            let status = response.status();
            if !status.is_success() {
                let detail = response.text().await.unwrap_or_default();
                return Err(ShowreelError::mail(format!(
                    "provider returned {status}: {detail}"
                )));
            }
            let parsed: SendResponse = response
                .json()
                .await
                .map_err(|e| ShowreelError::mail(format!("malformed provider response: {e}")))?;
            Ok(parsed.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: Some("Analytical Engines".to_string()),
            message: "I would like a demo.".to_string(),
        }
    }

    #[test]
    fn subject_names_the_sender() {
        assert_eq!(
            subject(&form()),
            "New Contact Form Submission from Ada Lovelace"
        );
    }

    #[test]
    fn notification_contains_all_fields() {
        let html = render_notification(&form());
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("mailto:ada@example.com"));
        assert!(html.contains("Analytical Engines"));
        assert!(html.contains("I would like a demo."));
    }

    #[test]
    fn company_block_is_omitted_when_absent() {
        let mut f = form();
        f.company = None;
        assert!(!render_notification(&f).contains("Company:"));
        f.company = Some("   ".to_string());
        assert!(!render_notification(&f).contains("Company:"));
    }

    #[test]
    fn user_input_is_escaped() {
        let mut f = form();
        f.name = "<script>alert(1)</script>".to_string();
        f.message = "a & b \"quoted\" <i>".to_string();
        let html = render_notification(&f);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b &quot;quoted&quot; &lt;i&gt;"));
    }

    #[test]
    fn escape_handles_every_special_char() {
        assert_eq!(escape_html(r#"&<>""#), "&amp;&lt;&gt;&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn outgoing_uses_config_addresses_and_reply_to() {
        let config = MailConfig {
            api_key: "key".to_string(),
            to_email: "inbox@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
        };
        let outgoing = config.outgoing(&form());
        assert_eq!(outgoing.to, "inbox@example.com");
        assert_eq!(outgoing.from, "noreply@example.com");
        assert_eq!(outgoing.reply_to, "ada@example.com");
        assert!(outgoing.subject.ends_with("Ada Lovelace"));
    }
}
