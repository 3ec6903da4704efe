// ==========================================
// Spool Winding Production System - Notification Layer
// ==========================================
// Outbound mail seam. The application builds the message; the
// transport is a deployment concern. The shipping implementation
// writes the message and its attachments into an outbox directory
// picked up by the site mail relay, so a failed delivery never
// loses the report artifacts.
// ==========================================

use crate::config::MailConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Notification error
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("attachment missing: {0}")]
    AttachmentMissing(PathBuf),

    #[error("outbox write failed: {0}")]
    Io(#[from] std::io::Error),
}

// ==========================================
// MailMessage - outbound message
// ==========================================
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
    pub attachments: Vec<PathBuf>,
}

/// Notifier seam: subject/body/attachments in, delivery out
pub trait Notifier {
    fn send(&self, message: &MailMessage) -> Result<(), NotifyError>;
}

// ==========================================
// OutboxNotifier
// ==========================================
pub struct OutboxNotifier {
    outbox_dir: PathBuf,
    mail: MailConfig,
}

impl OutboxNotifier {
    pub fn new(outbox_dir: impl Into<PathBuf>, mail: MailConfig) -> Self {
        Self {
            outbox_dir: outbox_dir.into(),
            mail,
        }
    }

    pub fn outbox_dir(&self) -> &Path {
        &self.outbox_dir
    }
}

impl Notifier for OutboxNotifier {
    /// Drop the message into a timestamped outbox folder
    ///
    /// Every attachment must exist before anything is written, so a
    /// failed send leaves no partial outbox entry behind.
    fn send(&self, message: &MailMessage) -> Result<(), NotifyError> {
        for attachment in &message.attachments {
            if !attachment.is_file() {
                return Err(NotifyError::AttachmentMissing(attachment.clone()));
            }
        }

        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let entry_dir = self.outbox_dir.join(stamp);
        fs::create_dir_all(&entry_dir)?;

        let mut envelope = String::new();
        envelope.push_str(&format!("From: {}\n", self.mail.smtp_user));
        envelope.push_str(&format!("To: {}\n", self.mail.to.join(", ")));
        if !self.mail.cc.is_empty() {
            envelope.push_str(&format!("Cc: {}\n", self.mail.cc.join(", ")));
        }
        envelope.push_str(&format!("Subject: {}\n\n", message.subject));
        envelope.push_str(&message.body);
        fs::write(entry_dir.join("message.txt"), envelope)?;

        for attachment in &message.attachments {
            let name = attachment
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            fs::copy(attachment, entry_dir.join(name))?;
        }

        tracing::info!(
            outbox = %entry_dir.display(),
            subject = %message.subject,
            attachments = message.attachments.len(),
            "report mail queued"
        );
        Ok(())
    }
}
