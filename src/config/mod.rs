// ==========================================
// Spool Winding Production System - Configuration
// ==========================================
// Storage locations, organization name and mail settings come
// from the environment; nothing deployment-specific lives in
// the code. Mail credentials are read but never logged.
// ==========================================

use std::env;
use std::path::{Path, PathBuf};

/// Default organization on the letterhead and mail subject
pub const DEFAULT_ORG_NAME: &str = "Hastings Jute Mill";

/// Database file name under the data directory
pub const DB_FILE_NAME: &str = "winding_production.db";

// ==========================================
// MailConfig - outbound mail settings
// ==========================================
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    /// Relay credential; never logged
    pub smtp_pass: Option<String>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
}

impl MailConfig {
    /// Read mail settings from the environment
    ///
    /// # Environment
    /// - WINDING_SMTP_HOST (required for mail to be configured)
    /// - WINDING_SMTP_PORT (default 587)
    /// - WINDING_SMTP_USER
    /// - WINDING_SMTP_PASS
    /// - WINDING_MAIL_TO (comma separated, required)
    /// - WINDING_MAIL_CC (comma separated)
    ///
    /// # Returns
    /// - `Some(MailConfig)` when host and recipients are present
    /// - `None` otherwise; report mailing is then unavailable
    pub fn from_env() -> Option<Self> {
        let smtp_host = env::var("WINDING_SMTP_HOST").ok()?;
        let to = split_recipients(&env::var("WINDING_MAIL_TO").ok()?);
        if smtp_host.trim().is_empty() || to.is_empty() {
            return None;
        }

        let smtp_port = env::var("WINDING_SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);

        Some(Self {
            smtp_host,
            smtp_port,
            smtp_user: env::var("WINDING_SMTP_USER").unwrap_or_default(),
            smtp_pass: env::var("WINDING_SMTP_PASS").ok(),
            to,
            cc: env::var("WINDING_MAIL_CC")
                .map(|v| split_recipients(&v))
                .unwrap_or_default(),
        })
    }
}

fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// ==========================================
// AppConfig - application configuration
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of all persisted state (db, backups, reports, outbox)
    pub data_dir: PathBuf,

    /// Organization name for letterhead and mail subject
    pub org_name: String,

    /// Mail settings; None disables report mailing
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Environment
    /// - WINDING_DATA_DIR (default: <user data dir>/spool-winding/data)
    /// - WINDING_ORG_NAME (default: "Hastings Jute Mill")
    /// - mail variables, see [`MailConfig::from_env`]
    pub fn from_env() -> Self {
        let data_dir = env::var("WINDING_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let org_name = env::var("WINDING_ORG_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORG_NAME.to_string());

        Self {
            data_dir,
            org_name,
            mail: MailConfig::from_env(),
        }
    }

    /// Configuration rooted at an explicit data directory (tests,
    /// embedded usage)
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            org_name: DEFAULT_ORG_NAME.to_string(),
            mail: None,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn csv_backup_dir(&self) -> PathBuf {
        self.data_dir.join("csv_backups")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.data_dir.join("reports")
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.data_dir.join("outbox")
    }

    /// Create the data directory tree
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [
            self.data_dir.as_path(),
            &self.csv_backup_dir(),
            &self.report_dir(),
            &self.outbox_dir(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("spool-winding")
        .join("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_recipients() {
        assert_eq!(
            split_recipients("a@mill.example, b@mill.example ,,"),
            vec!["a@mill.example".to_string(), "b@mill.example".to_string()]
        );
        assert!(split_recipients("  ").is_empty());
    }

    #[test]
    fn test_storage_paths() {
        let config = AppConfig::with_data_dir("/tmp/winding-test");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/tmp/winding-test/winding_production.db")
        );
        assert!(config.csv_backup_dir().ends_with("csv_backups"));
        assert!(config.report_dir().ends_with("reports"));
        assert!(config.outbox_dir().ends_with("outbox"));
    }
}
