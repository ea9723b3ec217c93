//! The persisted desktop session.
//! Everything that survives a reload is kept in one json document under [`STORAGE_KEY`].
use auth::{Authenticator, User};
use error::Error;
use mominos_assistant::message::Message;
use mominos_fs::entry::Entry;
use serde::{Deserialize, Serialize};
use settings::{SettingsPatch, UserSettings};
use storage::KeyValueStore;

pub mod auth;
pub mod error;
pub mod notification;
pub mod settings;
pub mod storage;
pub mod tests;

/// The key the session document is stored under
pub const STORAGE_KEY: &str = "mominos-storage";

/// The session document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub settings: UserSettings,
    pub files: Vec<Entry>,
    /// The folder the file explorer was showing
    pub current_path: String,
    pub ai_messages: Vec<Message>,
    pub ai_enabled: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_logged_in: false,
            settings: UserSettings::default(),
            files: Vec::new(),
            current_path: "/".to_string(),
            ai_messages: Vec::new(),
            ai_enabled: true,
        }
    }
}

impl SessionState {
    /// Read the saved session.
    /// Returns None on first run, and also when the document cannot be read.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        let raw = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read the saved session: {}", e);
                return None;
            }
        };
        match Self::parse(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("{}, starting fresh", e);
                None
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(|e| Error::Malformed(e.to_string()))
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), Error> {
        let raw = serde_json::to_string(self).map_err(|e| Error::Malformed(e.to_string()))?;
        store.set(STORAGE_KEY, &raw)
    }

    /// Forget the saved session
    pub fn reset(store: &mut dyn KeyValueStore) -> Result<(), Error> {
        store.remove(STORAGE_KEY)
    }

    /// Log in through an authenticator. A failed attempt leaves the session untouched.
    pub fn login(
        &mut self,
        auth: &impl Authenticator,
        username: &str,
        password: &str,
    ) -> Result<&User, Error> {
        let user = auth.login(username, password)?;
        log::info!("{} logged in", user.username);
        self.is_logged_in = true;
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_logged_in = false;
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
    }
}
