//! Resolved configuration schema.
//!
//! [`Config`] is the single output of resolution. Every field is always
//! populated: either with a built-in default, an empty string, or a value
//! supplied by git config or the environment.

use serde::Serialize;
use std::fmt;

/// Default Fulcio certificate authority address.
pub const DEFAULT_FULCIO_URL: &str = "https://fulcio.sigstore.dev";

/// Default Rekor transparency log address.
pub const DEFAULT_REKOR_URL: &str = "https://rekor.sigstore.dev";

/// Default OIDC client ID.
pub const DEFAULT_CLIENT_ID: &str = "sigstore";

/// Default OIDC issuer.
pub const DEFAULT_ISSUER: &str = "https://oauth2.sigstore.dev/auth";

/// Default Rekor storage mode.
pub const DEFAULT_REKOR_MODE: &str = "online";

/// Fully resolved gitsign configuration.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::{Config, DEFAULT_FULCIO_URL};
///
/// let config = Config::default();
/// assert_eq!(config.fulcio_url, DEFAULT_FULCIO_URL);
/// assert_eq!(config.rekor_mode, "online");
/// assert!(!config.match_committer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Address of the Fulcio server.
    pub fulcio_url: String,

    /// PEM encoded Fulcio root certificate, or a path to one.
    pub fulcio_root: String,

    /// Address of the Rekor server.
    pub rekor_url: String,

    /// Rekor storage mode, nominally `online` or `offline`.
    ///
    /// Kept as a free-form string; see [`Config::rekor_verification_mode`].
    pub rekor_mode: String,

    /// OIDC client ID.
    pub client_id: String,

    /// OIDC redirect URL.
    pub redirect_url: String,

    /// OIDC provider used to issue the ID token.
    pub issuer: String,

    /// Connector ID used when fetching a Dex OIDC token.
    pub connector_id: String,

    /// Timestamp Authority address.
    pub timestamp_url: String,

    /// Timestamp Authority PEM encoded certificate chain.
    pub timestamp_cert_chain: String,

    /// Path to write status output to.
    pub log_path: String,

    /// Committer name (`user.name`).
    pub committer_name: String,

    /// Committer email (`user.email`).
    pub committer_email: String,

    /// Require the certificate identity to match the committer.
    pub match_committer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fulcio_url: DEFAULT_FULCIO_URL.to_string(),
            fulcio_root: String::new(),
            rekor_url: DEFAULT_REKOR_URL.to_string(),
            rekor_mode: DEFAULT_REKOR_MODE.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            redirect_url: String::new(),
            issuer: DEFAULT_ISSUER.to_string(),
            connector_id: String::new(),
            timestamp_url: String::new(),
            timestamp_cert_chain: String::new(),
            log_path: String::new(),
            committer_name: String::new(),
            committer_email: String::new(),
            match_committer: false,
        }
    }
}

impl Config {
    /// Assign a raw string value to a field.
    ///
    /// [`Field::MatchCommitter`] is set to `true` only when the value is
    /// `true` in any letter case. Every other value, including `1` and `yes`,
    /// yields `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::config::{Config, Field};
    ///
    /// let mut config = Config::default();
    /// config.set(Field::MatchCommitter, "TRUE");
    /// assert!(config.match_committer);
    /// config.set(Field::MatchCommitter, "yes");
    /// assert!(!config.match_committer);
    /// ```
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::MatchCommitter => {
                self.match_committer = value.eq_ignore_ascii_case("true");
                return;
            }
            Field::FulcioUrl => &mut self.fulcio_url,
            Field::FulcioRoot => &mut self.fulcio_root,
            Field::RekorUrl => &mut self.rekor_url,
            Field::RekorMode => &mut self.rekor_mode,
            Field::ClientId => &mut self.client_id,
            Field::RedirectUrl => &mut self.redirect_url,
            Field::Issuer => &mut self.issuer,
            Field::ConnectorId => &mut self.connector_id,
            Field::TimestampUrl => &mut self.timestamp_url,
            Field::TimestampCertChain => &mut self.timestamp_cert_chain,
            Field::LogPath => &mut self.log_path,
            Field::CommitterName => &mut self.committer_name,
            Field::CommitterEmail => &mut self.committer_email,
        };
        value.clone_into(slot);
    }

    /// Render a field's current value as a string.
    #[must_use]
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::FulcioUrl => self.fulcio_url.clone(),
            Field::FulcioRoot => self.fulcio_root.clone(),
            Field::RekorUrl => self.rekor_url.clone(),
            Field::RekorMode => self.rekor_mode.clone(),
            Field::ClientId => self.client_id.clone(),
            Field::RedirectUrl => self.redirect_url.clone(),
            Field::Issuer => self.issuer.clone(),
            Field::ConnectorId => self.connector_id.clone(),
            Field::TimestampUrl => self.timestamp_url.clone(),
            Field::TimestampCertChain => self.timestamp_cert_chain.clone(),
            Field::LogPath => self.log_path.clone(),
            Field::CommitterName => self.committer_name.clone(),
            Field::CommitterEmail => self.committer_email.clone(),
            Field::MatchCommitter => self.match_committer.to_string(),
        }
    }

    /// Interpret the free-form Rekor mode.
    ///
    /// Returns `None` when the stored value is neither `online` nor
    /// `offline`. The stored string itself is never normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::config::{Config, RekorMode};
    ///
    /// let mut config = Config::default();
    /// assert_eq!(config.rekor_verification_mode(), Some(RekorMode::Online));
    ///
    /// config.rekor_mode = "Offline".to_string();
    /// assert_eq!(config.rekor_verification_mode(), Some(RekorMode::Offline));
    ///
    /// config.rekor_mode = "sometimes".to_string();
    /// assert_eq!(config.rekor_verification_mode(), None);
    /// ```
    #[must_use]
    pub fn rekor_verification_mode(&self) -> Option<RekorMode> {
        RekorMode::parse(&self.rekor_mode)
    }
}

/// Rekor storage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RekorMode {
    /// Commit SHAs are stored in Rekor; verification requires a live lookup.
    Online,
    /// Hashed commit content is stored in Rekor and the attributes needed
    /// for offline verification are embedded in the commit.
    Offline,
}

impl RekorMode {
    /// Parse a Rekor mode (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("online") {
            Some(Self::Online)
        } else if s.eq_ignore_ascii_case("offline") {
            Some(Self::Offline)
        } else {
            None
        }
    }
}

impl fmt::Display for RekorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// A single field of [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// [`Config::fulcio_url`]
    FulcioUrl,
    /// [`Config::fulcio_root`]
    FulcioRoot,
    /// [`Config::rekor_url`]
    RekorUrl,
    /// [`Config::rekor_mode`]
    RekorMode,
    /// [`Config::client_id`]
    ClientId,
    /// [`Config::redirect_url`]
    RedirectUrl,
    /// [`Config::issuer`]
    Issuer,
    /// [`Config::connector_id`]
    ConnectorId,
    /// [`Config::timestamp_url`]
    TimestampUrl,
    /// [`Config::timestamp_cert_chain`]
    TimestampCertChain,
    /// [`Config::log_path`]
    LogPath,
    /// [`Config::committer_name`]
    CommitterName,
    /// [`Config::committer_email`]
    CommitterEmail,
    /// [`Config::match_committer`]
    MatchCommitter,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 14] = [
        Self::FulcioUrl,
        Self::FulcioRoot,
        Self::RekorUrl,
        Self::RekorMode,
        Self::ClientId,
        Self::RedirectUrl,
        Self::Issuer,
        Self::ConnectorId,
        Self::TimestampUrl,
        Self::TimestampCertChain,
        Self::LogPath,
        Self::CommitterName,
        Self::CommitterEmail,
        Self::MatchCommitter,
    ];

    /// The canonical git config key for this field.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::config::Field;
    ///
    /// assert_eq!(Field::RekorMode.git_key(), "gitsign.rekorMode");
    /// assert_eq!(Field::CommitterName.git_key(), "user.name");
    /// ```
    #[must_use]
    pub const fn git_key(self) -> &'static str {
        match self {
            Self::FulcioUrl => "gitsign.fulcio",
            Self::FulcioRoot => "gitsign.fulcioRoot",
            Self::RekorUrl => "gitsign.rekor",
            Self::RekorMode => "gitsign.rekorMode",
            Self::ClientId => "gitsign.clientID",
            Self::RedirectUrl => "gitsign.redirectURL",
            Self::Issuer => "gitsign.issuer",
            Self::ConnectorId => "gitsign.connectorID",
            Self::TimestampUrl => "gitsign.timestampServerURL",
            Self::TimestampCertChain => "gitsign.timestampCertChain",
            Self::LogPath => "gitsign.logPath",
            Self::CommitterName => "user.name",
            Self::CommitterEmail => "user.email",
            Self::MatchCommitter => "gitsign.matchCommitter",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.git_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fulcio_url, "https://fulcio.sigstore.dev");
        assert_eq!(config.rekor_url, "https://rekor.sigstore.dev");
        assert_eq!(config.client_id, "sigstore");
        assert_eq!(config.issuer, "https://oauth2.sigstore.dev/auth");
        assert_eq!(config.rekor_mode, "online");
        assert!(config.fulcio_root.is_empty());
        assert!(config.redirect_url.is_empty());
        assert!(config.connector_id.is_empty());
        assert!(config.timestamp_url.is_empty());
        assert!(config.timestamp_cert_chain.is_empty());
        assert!(config.log_path.is_empty());
        assert!(config.committer_name.is_empty());
        assert!(config.committer_email.is_empty());
        assert!(!config.match_committer);
    }

    #[test]
    fn test_set_and_get_every_string_field() {
        let mut config = Config::default();
        for field in Field::ALL {
            if field == Field::MatchCommitter {
                continue;
            }
            config.set(field, "value with spaces");
            assert_eq!(config.get(field), "value with spaces", "{field}");
        }
    }

    #[test]
    fn test_set_empty_string_clears_default() {
        let mut config = Config::default();
        config.set(Field::FulcioUrl, "");
        assert_eq!(config.fulcio_url, "");
    }

    #[test]
    fn test_match_committer_literal_true_only() {
        let mut config = Config::default();
        for truthy in ["true", "TRUE", "True", "tRuE"] {
            config.set(Field::MatchCommitter, truthy);
            assert!(config.match_committer, "{truthy}");
        }
        for falsy in ["yes", "1", "on", "", "false", " true"] {
            config.set(Field::MatchCommitter, falsy);
            assert!(!config.match_committer, "{falsy:?}");
        }
        assert_eq!(config.get(Field::MatchCommitter), "false");
    }

    #[test]
    fn test_rekor_mode_parse() {
        assert_eq!(RekorMode::parse("online"), Some(RekorMode::Online));
        assert_eq!(RekorMode::parse("OFFLINE"), Some(RekorMode::Offline));
        assert_eq!(RekorMode::parse(""), None);
        assert_eq!(RekorMode::parse("on"), None);
        assert_eq!(RekorMode::Offline.to_string(), "offline");
    }

    #[test]
    fn test_invalid_rekor_mode_passes_through() {
        let mut config = Config::default();
        config.set(Field::RekorMode, "bogus");
        assert_eq!(config.rekor_mode, "bogus");
        assert_eq!(config.rekor_verification_mode(), None);
    }

    #[test]
    fn test_git_keys_are_unique() {
        let mut keys: Vec<_> = Field::ALL
            .iter()
            .map(|f| f.git_key().to_lowercase())
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }
}
