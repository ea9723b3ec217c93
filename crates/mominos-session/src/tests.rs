#[cfg(test)]
mod session_tests {
    use mominos_fs::FileSystem;

    use crate::{
        auth::Directory,
        error::Error,
        settings::{SettingsPatch, Theme},
        storage::{KeyValueStore, MemoryStore},
        SessionState, STORAGE_KEY,
    };

    #[test]
    fn first_run_has_no_session() {
        let store = MemoryStore::new();
        assert_eq!(SessionState::load(&store), None);
    }

    #[test]
    fn malformed_document_is_first_run() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();
        assert_eq!(SessionState::load(&store), None);
    }

    #[test]
    fn save_and_load() {
        let mut store = MemoryStore::new();
        let mut state = SessionState::default();
        state.files = FileSystem::with_defaults().entries().cloned().collect();
        state.current_path = "/Documents".to_string();
        state
            .login(&Directory::default(), "guest", "guest")
            .unwrap();
        state.save(&mut store).unwrap();

        let loaded = SessionState::load(&store).unwrap();
        assert_eq!(loaded, state);
        assert!(FileSystem::from_entries(loaded.files).is_ok());

        SessionState::reset(&mut store).unwrap();
        assert_eq!(SessionState::load(&store), None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state = SessionState::parse(r#"{"isLoggedIn":true,"settings":{"theme":"light"}}"#).unwrap();
        assert!(state.is_logged_in);
        assert!(state.ai_enabled);
        assert_eq!(state.current_path, "/");
        assert_eq!(state.settings.theme, Theme::Light);
        assert_eq!(state.settings.accent_color, "#8b5cf6");
    }

    #[test]
    fn document_layout() {
        let raw = serde_json::to_value(SessionState::default()).unwrap();
        for key in ["user", "isLoggedIn", "settings", "files", "currentPath", "aiMessages", "aiEnabled"] {
            assert!(raw.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(raw["settings"]["dockPosition"], "bottom");
        assert_eq!(raw["settings"]["autoSave"], true);
    }

    #[test]
    fn login_rules() {
        let directory = Directory::default();
        let mut state = SessionState::default();

        assert_eq!(state.login(&directory, "", "guest").err(), Some(Error::MissingCredentials));
        assert_eq!(state.login(&directory, "guest", "").err(), Some(Error::MissingCredentials));
        assert_eq!(
            state.login(&directory, "guest", "wrong").err(),
            Some(Error::InvalidCredentials)
        );
        assert!(!state.is_logged_in);

        let user = state.login(&directory, "Momin", "momin123").unwrap();
        assert_eq!(user.name, "Momin");
        assert!(state.is_logged_in);

        state.logout();
        assert!(state.user.is_none());
        assert!(!state.is_logged_in);
    }

    #[test]
    fn settings_patch() {
        let mut state = SessionState::default();
        let patch: SettingsPatch = serde_json::from_str(r##"{"notifications":false,"accentColor":"#ff0000"}"##).unwrap();
        state.update_settings(patch);

        assert!(!state.settings.notifications);
        assert_eq!(state.settings.accent_color, "#ff0000");
        assert_eq!(state.settings.theme, Theme::Dark);
        assert!(state.settings.auto_save);
    }
}

#[cfg(test)]
mod notification_tests {
    use mominos_fs::time::Timestamp;
    use web_time::Duration;

    use crate::notification::{NotificationCenter, NotificationKind};

    #[test]
    fn unread_and_read() {
        let mut center = NotificationCenter::new();
        center.success("Saved", "All good");
        center.error("Oops", "Something broke");
        assert_eq!(center.unread_count(), 2);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.notifications().len(), 2);
    }

    #[test]
    fn expiry() {
        let mut center = NotificationCenter::new();
        let start = Timestamp::from_millis(1_000);
        center.push(
            NotificationKind::Info,
            "Short",
            "",
            Some(Duration::from_millis(500)),
            start,
        );
        center.push(NotificationKind::Warning, "Sticky", "", None, start);

        assert_eq!(center.expire(Timestamp::from_millis(1_499)), 0);
        assert_eq!(center.expire(Timestamp::from_millis(1_500)), 1);
        assert_eq!(center.notifications().len(), 1);
        assert_eq!(center.notifications()[0].title, "Sticky");
    }

    #[test]
    fn suppressed_when_disabled() {
        let mut center = NotificationCenter::new();
        center.set_enabled(false);
        assert!(center.success("Hidden", "").is_none());
        assert!(center.notifications().is_empty());

        center.set_enabled(true);
        let id = center.success("Shown", "").unwrap();
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod local_store_tests {
    use wasm_bindgen_test::*;

    use crate::{
        storage::{KeyValueStore, LocalStore},
        SessionState,
    };

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trip_through_local_storage() {
        let mut store = LocalStore::open().unwrap();
        SessionState::reset(&mut store).unwrap();
        assert_eq!(SessionState::load(&store), None);

        let state = SessionState {
            ai_enabled: false,
            ..SessionState::default()
        };
        state.save(&mut store).unwrap();
        assert_eq!(SessionState::load(&store), Some(state));
        assert!(store.get("missing-key").unwrap().is_none());
    }
}
