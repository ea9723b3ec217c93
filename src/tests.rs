#[cfg(test)]
mod desktop_tests {
    use mominos_assistant::{
        backend::FetchBackend,
        message::{Action, ActionKind},
    };
    use mominos_fs::entry::EntryId;
    use mominos_session::{
        auth::Directory,
        settings::{SettingsPatch, Theme},
        storage::{KeyValueStore, MemoryStore},
        SessionState, STORAGE_KEY,
    };
    use mominos_wm::app::AppKind;

    use crate::desktop::{Desktop, Effect, NEW_DOCUMENT};

    fn desktop() -> Desktop {
        Desktop::new(FetchBackend::default())
    }

    #[test]
    fn first_boot_seeds_defaults() {
        let store = MemoryStore::new();
        let desktop = Desktop::boot(&store, FetchBackend::default());
        assert!(desktop.fs.get(&EntryId::new("folder-documents")).is_some());
        assert!(desktop.wm.is_empty());
        assert_eq!(desktop.explorer.location(&desktop.fs), "/");
    }

    #[test]
    fn session_survives_a_reload() {
        let mut store = MemoryStore::new();
        let mut desktop = desktop();
        desktop.explorer.open(&desktop.fs, &EntryId::new("folder-documents"));
        desktop.create_document().unwrap();
        desktop.ask_locally("hello");
        desktop.persist(&mut store);

        let restored = Desktop::boot(&store, FetchBackend::default());
        assert_eq!(restored.explorer.location(&restored.fs), "/Documents");
        assert_eq!(restored.assistant.history().len(), 2);
        assert!(restored
            .fs
            .list(Some(&EntryId::new("folder-documents")))
            .iter()
            .any(|e| e.name() == NEW_DOCUMENT));
    }

    #[test]
    fn settings_survive_a_reload() {
        let mut store = MemoryStore::new();
        let mut desktop = desktop();
        desktop.persist(&mut store);

        desktop.update_settings(SettingsPatch {
            auto_save: Some(false),
            theme: Some(Theme::Light),
            ..SettingsPatch::default()
        });
        desktop.persist(&mut store);
        assert!(store.get(STORAGE_KEY).unwrap().is_some());

        let restored = Desktop::boot(&store, FetchBackend::default());
        assert!(!restored.session.settings.auto_save);
        assert_eq!(restored.session.settings.theme, Theme::Light);
    }

    #[test]
    fn logout_keeps_the_z_index_counting() {
        let mut desktop = desktop();
        let before = desktop.open_app(AppKind::Terminal);
        let top = desktop.wm.get(before).unwrap().z_index();

        desktop.logout();
        let after = desktop.open_app(AppKind::Terminal);
        assert!(desktop.wm.get(after).unwrap().z_index() > top);
    }

    #[test]
    fn broken_saved_tree_falls_back_to_defaults() {
        let mut desktop = desktop();
        desktop
            .fs
            .create_file("notes.txt", "", Some(&EntryId::new("folder-documents")))
            .unwrap();
        let mut state = desktop.snapshot();
        let raw = serde_json::to_string(&state.files).unwrap();
        // point a file at a parent that does not exist
        let broken = raw.replacen("\"parent\":\"folder-documents\"", "\"parent\":\"folder-gone\"", 1);
        state.files = serde_json::from_str(&broken).unwrap();

        let restored = Desktop::restore(state, FetchBackend::default());
        assert!(restored.fs.table().validate().is_ok());
        assert!(restored.fs.get(&EntryId::new("file-welcome")).is_some());
    }

    #[test]
    fn missing_folder_restores_to_root() {
        let state = SessionState {
            current_path: "/Nowhere".to_string(),
            ..desktop().snapshot()
        };
        let restored = Desktop::restore(state, FetchBackend::default());
        assert_eq!(restored.explorer.location(&restored.fs), "/");
    }

    #[test]
    fn windows_cascade() {
        let mut desktop = desktop();
        let first = desktop.open_app(AppKind::Terminal);
        let second = desktop.open_app(AppKind::Terminal);
        let a = desktop.wm.get(first).unwrap().geometry();
        let b = desktop.wm.get(second).unwrap().geometry();
        assert_eq!((b.x - a.x, b.y - a.y), (30, 30));
        assert_eq!(desktop.wm.active(), Some(second));
    }

    #[test]
    fn assistant_actions() {
        let mut desktop = desktop();

        let effect = desktop.perform(&Action::open_app("Open Mail", "mail"));
        let Effect::Window(id) = effect else {
            panic!("expected a window, got {:?}", effect);
        };
        assert_eq!(desktop.wm.get(id).unwrap().app(), AppKind::Email);

        assert_eq!(
            desktop.perform(&Action::open_app("Show All Apps", "launcher")),
            Effect::ShowLauncher
        );
        assert_eq!(desktop.perform(&Action::open_app("?", "toaster")), Effect::None);
        assert_eq!(
            desktop.perform(&Action::open_url("GitHub", "https://www.github.com")),
            Effect::OpenUrl("https://www.github.com".to_string())
        );

        let effect = desktop.perform(&Action::new(ActionKind::CreateFile, "Create", "new_file"));
        let Effect::File(id) = effect else {
            panic!("expected a file, got {:?}", effect);
        };
        assert_eq!(desktop.fs.get(&id).unwrap().name(), NEW_DOCUMENT);
        assert_eq!(desktop.fs.get(&id).unwrap().parent(), None);
        assert_eq!(desktop.notifications.unread_count(), 1);
    }

    #[test]
    fn notifications_follow_settings() {
        let mut desktop = desktop();
        desktop.update_settings(SettingsPatch {
            notifications: Some(false),
            ..SettingsPatch::default()
        });
        desktop.create_document().unwrap();
        assert!(desktop.notifications.notifications().is_empty());
    }

    #[test]
    fn login_and_logout() {
        let mut desktop = desktop();
        assert!(desktop.login(&Directory::default(), "guest", "nope").is_err());
        assert_eq!(desktop.username(), "user");

        let user = desktop.login(&Directory::default(), "guest", "guest").unwrap();
        assert_eq!(user.username, "guest");
        assert_eq!(desktop.username(), "guest");

        desktop.open_app(AppKind::Music);
        desktop.logout();
        assert!(desktop.wm.is_empty());
        assert!(!desktop.session.is_logged_in);
    }
}

#[cfg(test)]
mod search_tests {
    use mominos_fs::FileSystem;

    use crate::search::{global_search, HitKind};

    #[test]
    fn empty_query_finds_nothing() {
        let fs = FileSystem::with_defaults();
        assert!(global_search(&fs, "").is_empty());
        assert!(global_search(&fs, "   ").is_empty());
    }

    #[test]
    fn ranks_by_score() {
        let mut fs = FileSystem::with_defaults();
        fs.create_file("music-notes.txt", "", None).unwrap();

        let hits = global_search(&fs, "music");
        let scores: Vec<f32> = hits.iter().map(|h| h.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(scores, sorted);

        let folder = hits.iter().find(|h| h.title == "Music").unwrap();
        assert_eq!(folder.kind, HitKind::Folder);
        assert_eq!(folder.score, 1.0);
        let notes = hits.iter().find(|h| h.title == "music-notes.txt").unwrap();
        assert_eq!(notes.score, 0.5);
        assert!(hits.iter().any(|h| h.kind == HitKind::App && h.id == "music"));
    }

    #[test]
    fn settings_and_actions() {
        let fs = FileSystem::new();
        let hits = global_search(&fs, "screen");
        let kinds: Vec<HitKind> = hits.iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec![HitKind::Setting, HitKind::Action, HitKind::Action]);
        assert_eq!(hits[0].id, "display-settings");
        assert_eq!(hits[0].score, 0.8);
        assert_eq!(hits[1].score, 0.6);
    }
}

#[cfg(test)]
mod terminal_tests {
    use chrono::Utc;
    use mominos_fs::FileSystem;

    use crate::terminal::{Output, Terminal};

    fn run(term: &mut Terminal, fs: &mut FileSystem, line: &str) -> Output {
        term.run(fs, "momin", line, Utc::now())
    }

    fn text(s: &str) -> Output {
        Output::Text(s.to_string())
    }

    #[test]
    fn navigation() {
        let mut fs = FileSystem::with_defaults();
        let mut term = Terminal::new();

        assert_eq!(run(&mut term, &mut fs, "pwd"), text("/"));
        assert_eq!(run(&mut term, &mut fs, "cd Documents"), text(""));
        assert_eq!(run(&mut term, &mut fs, "pwd"), text("/Documents"));
        assert_eq!(run(&mut term, &mut fs, "cd .."), text(""));
        assert_eq!(run(&mut term, &mut fs, "cd /Pictures"), text(""));
        assert_eq!(run(&mut term, &mut fs, "cd ~"), text(""));
        assert_eq!(run(&mut term, &mut fs, "pwd"), text("/"));

        assert!(matches!(run(&mut term, &mut fs, "cd Nowhere"), Output::Error(_)));
        assert!(matches!(run(&mut term, &mut fs, "cd Welcome.txt"), Output::Error(_)));
    }

    #[test]
    fn files() {
        let mut fs = FileSystem::with_defaults();
        let mut term = Terminal::new();

        assert_eq!(
            run(&mut term, &mut fs, "mkdir Projects"),
            text("Directory 'Projects' created")
        );
        assert_eq!(
            run(&mut term, &mut fs, "touch Projects/todo.md"),
            text("File 'todo.md' created")
        );
        assert_eq!(run(&mut term, &mut fs, "echo ship it > Projects/todo.md"), text(""));
        assert_eq!(run(&mut term, &mut fs, "cat Projects/todo.md"), text("ship it"));
        assert_eq!(run(&mut term, &mut fs, "ls Projects"), text("todo.md"));

        assert_eq!(run(&mut term, &mut fs, "mv Projects/todo.md Documents"), text(""));
        assert_eq!(run(&mut term, &mut fs, "cat Documents/todo.md"), text("ship it"));
        assert_eq!(run(&mut term, &mut fs, "mv Documents/todo.md /done.md"), text(""));
        assert_eq!(run(&mut term, &mut fs, "cat done.md"), text("ship it"));

        assert!(matches!(run(&mut term, &mut fs, "rm Projects"), Output::Error(_)));
        assert_eq!(run(&mut term, &mut fs, "rm -r Projects"), text(""));
        assert!(fs.resolve("/Projects").is_err());
        assert!(fs.table().validate().is_ok());
    }

    #[test]
    fn moving_a_folder_into_itself_is_refused() {
        let mut fs = FileSystem::with_defaults();
        let mut term = Terminal::new();
        run(&mut term, &mut fs, "mkdir Documents/Inner");
        assert!(matches!(
            run(&mut term, &mut fs, "mv Documents Documents/Inner"),
            Output::Error(_)
        ));
        assert!(fs.resolve("/Documents/Inner").is_ok());
    }

    #[test]
    fn misc_commands() {
        let mut fs = FileSystem::new();
        let mut term = Terminal::new();

        assert_eq!(run(&mut term, &mut fs, "whoami"), text("momin"));
        assert_eq!(run(&mut term, &mut fs, "echo  hello   world"), text("hello world"));
        assert_eq!(run(&mut term, &mut fs, "clear"), Output::Clear);
        assert_eq!(
            run(&mut term, &mut fs, "frobnicate now"),
            Output::Error("frobnicate: command not found".to_string())
        );
        assert_eq!(
            run(&mut term, &mut fs, "history"),
            text("1  whoami\n2  echo  hello   world\n3  clear\n4  frobnicate now\n5  history")
        );
        assert!(matches!(run(&mut term, &mut fs, "mkdir"), Output::Error(_)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod api_tests {
    use mominos_fs::FileSystem;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::{Map, Reflect};

    use crate::api::to_js;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn entries_reach_js_as_plain_objects() {
        let mut fs = FileSystem::new();
        let file = fs.create_file("notes.txt", "hi", None).unwrap();

        let value = to_js(&file).unwrap();
        assert!(!value.is_instance_of::<Map>());
        let name = Reflect::get(&value, &"name".into()).unwrap();
        assert_eq!(name.as_string().as_deref(), Some("notes.txt"));
        let kind = Reflect::get(&value, &"type".into()).unwrap();
        assert_eq!(kind.as_string().as_deref(), Some("file"));
    }
}
