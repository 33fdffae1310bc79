//! E-mail notification over SMTP submission.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::Smtp;
use crate::parser::months;

const SENDER_NAME: &str = "Bilet İzleyici";

pub fn render_subject(max_date: NaiveDate) -> String {
    format!(
        "Profesyonel Bilet Alert — Yeni tarih: {:02}.{:02}.{}",
        max_date.day(),
        max_date.month(),
        max_date.year()
    )
}

pub fn render_body(relevant: &[NaiveDate], target_url: &str) -> String {
    let lines = relevant
        .iter()
        .map(|d| format!("- {} {} {}", d.day(), months::month_name(d.month()), d.year()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Merhaba,\n\n\
         \"PROFESYONEL\" oyunu için yeni tarih(ler) tespit edildi.\n\n\
         Bulunanlar:\n{}\n\n\
         Sayfa: {}\n\n\
         Sevgiler,\n\
         Bilet İzleyici\n",
        lines, target_url
    )
}

/// Submit one plain-text message over an authenticated, STARTTLS-upgraded
/// connection.
pub async fn send(smtp: &Smtp, subject: &str, body: &str) -> Result<()> {
    let from_address = smtp
        .from
        .parse::<lettre::Address>()
        .with_context(|| format!("invalid FROM_EMAIL address: {}", smtp.from))?;
    let to = smtp
        .to
        .parse::<Mailbox>()
        .with_context(|| format!("invalid TO_EMAIL address: {}", smtp.to))?;

    let message = Message::builder()
        .from(Mailbox::new(Some(SENDER_NAME.to_string()), from_address))
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .context("failed to build message")?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
        .with_context(|| format!("invalid SMTP relay host: {}", smtp.host))?
        .port(smtp.port)
        .credentials(Credentials::new(smtp.user.clone(), smtp.pass.clone()))
        .build();

    transport
        .send(message)
        .await
        .with_context(|| format!("SMTP submission to {}:{} failed", smtp.host, smtp.port))?;
    info!("notification e-mail sent to {}", smtp.to);
    Ok(())
}

// ── Tests ──
