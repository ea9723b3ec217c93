//! The desktop: every subsystem of a running session in one place.
use chrono::Utc;
use mominos_assistant::{
    backend::FetchBackend,
    message::{Action, ActionKind, Reply},
    Assistant,
};
use mominos_fs::{entry::EntryId, explorer::Explorer, time::Timestamp, FileSystem};
use mominos_session::{
    auth::{Authenticator, User},
    notification::{NotificationCenter, NotificationKind},
    settings::SettingsPatch,
    storage::KeyValueStore,
    SessionState,
};
use mominos_wm::{
    app::AppKind,
    window::{WindowId, WindowSpec},
    WindowManager,
};
use serde::Serialize;
use web_time::Duration;

use crate::{
    search::{global_search, SearchHit},
    terminal::{Output, Terminal},
};

/// The name of the file the "create file" action makes
pub const NEW_DOCUMENT: &str = "New Document.txt";

/// How long a toast stays up
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Where new windows open, shifted down and right for every open window
const CASCADE_ORIGIN: (i32, i32) = (100, 80);
const CASCADE_STEP: i32 = 30;

/// What the UI has to do after an assistant action ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Effect {
    Window(WindowId),
    OpenUrl(String),
    Search(String),
    File(EntryId),
    ShowLauncher,
    None,
}

/// A running desktop session
pub struct Desktop {
    pub fs: FileSystem,
    pub explorer: Explorer,
    pub wm: WindowManager,
    pub terminal: Terminal,
    pub assistant: Assistant<FetchBackend>,
    pub notifications: NotificationCenter,
    pub session: SessionState,
}

impl Desktop {
    /// A first run desktop with the default folders
    pub fn new(backend: FetchBackend) -> Self {
        Self {
            fs: FileSystem::with_defaults(),
            explorer: Explorer::new(),
            wm: WindowManager::new(),
            terminal: Terminal::new(),
            assistant: Assistant::new(backend),
            notifications: NotificationCenter::new(),
            session: SessionState::default(),
        }
    }

    /// Rebuild a desktop from a saved session.
    /// A file tree that fails validation is replaced by the defaults.
    pub fn restore(state: SessionState, backend: FetchBackend) -> Self {
        let fs = if state.files.is_empty() {
            FileSystem::with_defaults()
        } else {
            match FileSystem::from_entries(state.files.clone()) {
                Ok(fs) => fs,
                Err(e) => {
                    log::warn!("Saved files are inconsistent, starting with defaults: {}", e);
                    FileSystem::with_defaults()
                }
            }
        };
        let current = match fs.resolve(&state.current_path) {
            Ok(Some(id)) if fs.get(&id).map(|e| e.is_folder()).unwrap_or(false) => Some(id),
            _ => None,
        };

        let mut notifications = NotificationCenter::new();
        notifications.set_enabled(state.settings.notifications);

        Self {
            explorer: Explorer::at(current),
            fs,
            wm: WindowManager::new(),
            terminal: Terminal::new(),
            assistant: Assistant::with_history(backend, state.ai_messages.clone()),
            notifications,
            session: state,
        }
    }

    /// Restore the saved session, or start fresh on first run
    pub fn boot(store: &dyn KeyValueStore, backend: FetchBackend) -> Self {
        match SessionState::load(store) {
            Some(state) => {
                log::info!("Restoring saved session");
                Self::restore(state, backend)
            }
            None => {
                log::info!("No saved session, starting fresh");
                Self::new(backend)
            }
        }
    }

    /// The session document for the current state
    pub fn snapshot(&self) -> SessionState {
        SessionState {
            files: self.fs.entries().cloned().collect(),
            current_path: self.explorer.location(&self.fs),
            ai_messages: self.assistant.history().to_vec(),
            ..self.session.clone()
        }
    }

    /// Save the session.
    /// Auto-save is a preference the UI shows, it is saved like every other setting.
    pub fn persist(&self, store: &mut dyn KeyValueStore) {
        if let Err(e) = self.snapshot().save(store) {
            log::error!("Failed to save the session: {}", e);
        }
    }

    pub fn login(
        &mut self,
        auth: &impl Authenticator,
        username: &str,
        password: &str,
    ) -> Result<User, mominos_session::error::Error> {
        let user = self.session.login(auth, username, password)?.clone();
        self.notify(
            NotificationKind::Success,
            "Welcome",
            &format!("Welcome back, {}!", user.name),
        );
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.wm.close_all();
    }

    /// The name shown by `whoami` and friends
    pub fn username(&self) -> &str {
        self.session
            .user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("user")
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.session.update_settings(patch);
        self.notifications
            .set_enabled(self.session.settings.notifications);
    }

    /// Post a toast that goes away on its own
    pub fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) {
        self.notifications.push(
            kind,
            title,
            message,
            Some(NOTIFICATION_DURATION),
            Timestamp::now(),
        );
    }

    /// Open a new window for an app, cascaded from the last one
    pub fn open_app(&mut self, app: AppKind) -> WindowId {
        let offset = CASCADE_STEP * (self.wm.len() % 10) as i32;
        self.wm.add_window(WindowSpec::for_app(
            app,
            CASCADE_ORIGIN.0 + offset,
            CASCADE_ORIGIN.1 + offset,
        ))
    }

    /// Create an empty text file in the folder the explorer shows
    pub fn create_document(&mut self) -> Result<EntryId, mominos_fs::error::Error> {
        let parent = self.explorer.current(&self.fs).cloned();
        let file = self.fs.create_file(NEW_DOCUMENT, "", parent.as_ref())?;
        self.notify(
            NotificationKind::Success,
            "File Created",
            &format!("Created {}", NEW_DOCUMENT),
        );
        Ok(file.id().clone())
    }

    /// Run an assistant action against the desktop
    pub fn perform(&mut self, action: &Action) -> Effect {
        match action.kind {
            ActionKind::OpenApp if action.value == "launcher" => Effect::ShowLauncher,
            ActionKind::OpenApp => match action.value.parse::<AppKind>() {
                Ok(app) => Effect::Window(self.open_app(app)),
                Err(e) => {
                    log::warn!("Assistant asked for an unknown app: {}", e);
                    Effect::None
                }
            },
            ActionKind::OpenFile => Effect::Window(self.open_app(AppKind::FileExplorer)),
            ActionKind::OpenUrl => Effect::OpenUrl(action.value.clone()),
            ActionKind::Search => Effect::Search(action.value.clone()),
            ActionKind::CreateFile => match self.create_document() {
                Ok(id) => Effect::File(id),
                Err(e) => {
                    log::error!("Failed to create a document: {}", e);
                    Effect::None
                }
            },
            ActionKind::SendEmail => Effect::Window(self.open_app(AppKind::Email)),
            ActionKind::SetReminder => {
                self.notify(NotificationKind::Info, "Reminder", &action.value);
                Effect::Window(self.open_app(AppKind::Calendar))
            }
            ActionKind::SystemCommand => {
                self.notify(
                    NotificationKind::Warning,
                    "System Action",
                    &format!("Executing {}", action.label),
                );
                Effect::None
            }
        }
    }

    /// Answer from the local reply table
    pub fn ask_locally(&mut self, input: &str) -> Reply {
        self.assistant.respond_locally(input, Utc::now())
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        global_search(&self.fs, query)
    }

    pub fn run_command(&mut self, line: &str) -> Output {
        let user = self.username().to_string();
        self.terminal.run(&mut self.fs, &user, line, Utc::now())
    }

    /// Drop notifications whose time is up
    pub fn tick(&mut self, now: Timestamp) -> usize {
        self.notifications.expire(now)
    }
}
