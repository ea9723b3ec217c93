#[cfg(test)]
mod entrytable_tests {
    use crate::{
        entry::{Entry, EntryId},
        error::Error,
        table::EntryTable,
    };

    fn folder(id: &str) -> Entry {
        Entry::folder(EntryId::new(id), id)
    }

    #[test]
    fn insert_links_both_sides() {
        let mut table = EntryTable::new();
        table.insert(folder("root"), None).unwrap();
        table
            .insert(folder("docs"), Some(&EntryId::new("root")))
            .unwrap();

        let root = table.get(&EntryId::new("root")).unwrap();
        let docs = table.get(&EntryId::new("docs")).unwrap();
        assert_eq!(root.children(), &[EntryId::new("docs")]);
        assert_eq!(docs.parent(), Some(&EntryId::new("root")));
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn insert_under_file_is_rejected() {
        let mut table = EntryTable::new();
        table
            .insert(Entry::file(EntryId::new("a"), "a.txt", None), None)
            .unwrap();

        let result = table.insert(folder("b"), Some(&EntryId::new("a")));
        assert_eq!(result, Err(Error::NotAFolder(EntryId::new("a"))));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reparent_into_descendant_is_rejected() {
        let mut table = EntryTable::new();
        table.insert(folder("outer"), None).unwrap();
        table
            .insert(folder("inner"), Some(&EntryId::new("outer")))
            .unwrap();

        let result = table.reparent(&EntryId::new("outer"), Some(&EntryId::new("inner")));
        assert!(matches!(result, Err(Error::WouldCreateCycle { .. })));
        assert_eq!(
            table.get(&EntryId::new("inner")).unwrap().parent(),
            Some(&EntryId::new("outer"))
        );
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn resolve_and_path_agree() {
        let mut table = EntryTable::new();
        table.insert(folder("Documents"), None).unwrap();
        table
            .insert(
                Entry::file(EntryId::new("notes"), "notes.txt", None),
                Some(&EntryId::new("Documents")),
            )
            .unwrap();

        let path = table.path_of(&EntryId::new("notes")).unwrap();
        assert_eq!(path, "/Documents/notes.txt");
        assert_eq!(table.resolve(&path), Ok(Some(EntryId::new("notes"))));
        assert_eq!(table.resolve("/"), Ok(None));
        assert!(table.resolve("/Documents/missing").is_err());
    }

    #[test]
    fn validate_catches_dangling_child() {
        let mut docs = folder("docs");
        docs.children_mut().unwrap().push(EntryId::new("ghost"));

        let result = EntryTable::from_entries(vec![docs]);
        assert!(matches!(result, Err(Error::BrokenLink { .. })));
    }
}

#[cfg(test)]
mod filesystem_tests {
    use futures::executor::block_on;

    use crate::{
        entry::{EntryId, EntryKind},
        error::Error,
        icon::IconCategory,
        upload::{MemoryUpload, MAX_UPLOAD_SIZE},
        EntryPatch, FileSystem,
    };

    fn with_root() -> (FileSystem, EntryId) {
        let mut fs = FileSystem::new();
        let root = fs.create_folder("Root", None).unwrap();
        (fs, root.id().clone())
    }

    /// Every parent link is mirrored exactly once in a folder's children
    fn assert_consistent(fs: &FileSystem) {
        assert_eq!(fs.table().validate(), Ok(()));
    }

    #[test]
    fn create_links_child_into_parent() {
        let (mut fs, root) = with_root();
        let docs = fs.create_folder("Docs", Some(&root)).unwrap();
        let file = fs.create_file("a.txt", "hello", Some(docs.id())).unwrap();

        assert_eq!(docs.parent(), Some(&root));
        assert_eq!(file.parent(), Some(docs.id()));
        assert_eq!(fs.get(&root).unwrap().children(), &[docs.id().clone()]);
        assert_eq!(fs.get(docs.id()).unwrap().children(), &[file.id().clone()]);
        assert_eq!(file.size(), 5);
        assert_eq!(file.kind(), EntryKind::File);
        assert_consistent(&fs);
    }

    #[test]
    fn create_under_unknown_parent_fails() {
        let mut fs = FileSystem::new();
        let ghost = EntryId::new("ghost");
        assert_eq!(
            fs.create_file("a.txt", "", Some(&ghost)),
            Err(Error::NoSuchEntry(ghost))
        );
        assert_eq!(fs.entries().count(), 0);
    }

    #[test]
    fn delete_folder_cascades() {
        let (mut fs, root) = with_root();
        let docs = fs.create_folder("Docs", Some(&root)).unwrap();
        let nested = fs.create_folder("Nested", Some(docs.id())).unwrap();
        let a = fs.create_file("a.txt", "", Some(docs.id())).unwrap();
        let b = fs.create_file("b.txt", "", Some(nested.id())).unwrap();

        assert!(fs.delete(docs.id()));

        for gone in [docs.id(), nested.id(), a.id(), b.id()] {
            assert!(fs.get(gone).is_none());
        }
        assert!(fs.get(&root).unwrap().children().is_empty());
        assert_eq!(fs.entries().count(), 1);
        assert_consistent(&fs);
    }

    #[test]
    fn second_delete_is_a_noop() {
        let (mut fs, root) = with_root();
        let file = fs.create_file("a.txt", "", Some(&root)).unwrap();

        assert!(fs.delete(file.id()));
        let before = fs.export().unwrap();
        assert!(!fs.delete(file.id()));
        assert_eq!(fs.export().unwrap(), before);
    }

    #[test]
    fn move_relinks_old_and_new_parent() {
        let (mut fs, root) = with_root();
        let a = fs.create_folder("A", Some(&root)).unwrap();
        let b = fs.create_folder("B", Some(&root)).unwrap();
        let file = fs.create_file("f.txt", "", Some(a.id())).unwrap();

        assert!(fs.move_entry(file.id(), Some(b.id())));

        let holders: Vec<_> = fs
            .entries()
            .filter(|e| e.children().contains(file.id()))
            .map(|e| e.id().clone())
            .collect();
        assert_eq!(holders, vec![b.id().clone()]);
        assert_eq!(fs.get(file.id()).unwrap().parent(), Some(b.id()));
        assert!(fs.get(a.id()).unwrap().children().is_empty());
        assert_consistent(&fs);
    }

    #[test]
    fn move_to_root_and_onto_file() {
        let (mut fs, root) = with_root();
        let file = fs.create_file("f.txt", "", Some(&root)).unwrap();
        let other = fs.create_file("g.txt", "", None).unwrap();

        assert!(!fs.move_entry(file.id(), Some(other.id())));
        assert_eq!(fs.get(file.id()).unwrap().parent(), Some(&root));

        assert!(fs.move_entry(file.id(), None));
        assert_eq!(fs.get(file.id()).unwrap().parent(), None);
        assert!(fs.get(&root).unwrap().children().is_empty());
        assert_consistent(&fs);
    }

    #[test]
    fn update_recomputes_size() {
        let (mut fs, root) = with_root();
        let file = fs.create_file("a.txt", "hi", Some(&root)).unwrap();

        let patch = EntryPatch {
            name: None,
            content: Some("hello world".to_string()),
        };
        assert!(fs.update_file(file.id(), patch));
        let updated = fs.get(file.id()).unwrap();
        assert_eq!(updated.size(), 11);
        assert_eq!(updated.content(), Some("hello world"));
        assert!(updated.modified() >= file.modified());

        assert!(!fs.update_file(&EntryId::new("ghost"), EntryPatch::default()));
        let folder_content = EntryPatch {
            name: None,
            content: Some("nope".to_string()),
        };
        assert!(!fs.update_file(&root, folder_content));
    }

    #[test]
    fn rename_changes_icon() {
        let mut fs = FileSystem::new();
        let file = fs.create_file("song.txt", "", None).unwrap();
        assert_eq!(file.category(), IconCategory::Document);

        assert!(fs.rename(file.id(), "song.mp3"));
        let renamed = fs.get(file.id()).unwrap();
        assert_eq!(renamed.name(), "song.mp3");
        assert_eq!(renamed.category(), IconCategory::Audio);
        assert!(!fs.rename(&EntryId::new("ghost"), "x"));
    }

    #[test]
    fn search_matches_name_and_content_in_store_order() {
        let mut fs = FileSystem::new();
        let first = fs.create_file("Budget.csv", "numbers", None).unwrap();
        fs.create_file("notes.txt", "nothing here", None).unwrap();
        let third = fs.create_file("todo.txt", "Update the BUDGET", None).unwrap();

        let hits: Vec<_> = fs.search("budget").iter().map(|e| e.id().clone()).collect();
        assert_eq!(hits, vec![first.id().clone(), third.id().clone()]);
    }

    #[test]
    fn export_import_round_trip() {
        let (mut fs, root) = with_root();
        let docs = fs.create_folder("Docs", Some(&root)).unwrap();
        fs.create_file("a.txt", "alpha", Some(docs.id())).unwrap();
        fs.create_file("b.md", "beta", None).unwrap();

        let json = fs.export().unwrap();
        let mut restored = FileSystem::new();
        assert!(restored.import(&json));

        let original: Vec<_> = fs.entries().cloned().collect();
        let imported: Vec<_> = restored.entries().cloned().collect();
        assert_eq!(original, imported);
    }

    #[test]
    fn import_fails_closed() {
        let mut fs = FileSystem::with_defaults();
        let before = fs.export().unwrap();

        assert!(!fs.import("{ not json"));
        assert!(!fs.import(r#"[{"id":"x","name":"x","modified":0,"parent":"missing","type":"file"}]"#));
        assert_eq!(fs.export().unwrap(), before);
    }

    #[test]
    fn upload_over_limit_is_rejected() {
        let mut fs = FileSystem::new();
        let mut upload = MemoryUpload::new("huge.bin", "tiny");
        upload.reported_size = Some(MAX_UPLOAD_SIZE + 1);

        let result = block_on(fs.upload_file(&upload, None));
        assert!(matches!(result, Err(Error::FileTooLarge { .. })));
        assert_eq!(fs.entries().count(), 0);
    }

    #[test]
    fn upload_stores_content_and_metadata() {
        let (mut fs, root) = with_root();
        let upload = MemoryUpload::new("readme.md", "# Hello");

        let entry = block_on(fs.upload_file(&upload, Some(&root))).unwrap();
        assert_eq!(entry.content(), Some("# Hello"));
        assert_eq!(entry.size(), 7);
        assert_eq!(entry.metadata().unwrap().original_name, "readme.md");
        assert_eq!(fs.get(&root).unwrap().children(), &[entry.id().clone()]);
    }

    #[test]
    fn copy_duplicates_subtree_with_fresh_ids() {
        let (mut fs, root) = with_root();
        let docs = fs.create_folder("Docs", Some(&root)).unwrap();
        let file = fs.create_file("a.txt", "alpha", Some(docs.id())).unwrap();

        let copy = fs.copy(docs.id(), None).unwrap();
        assert_ne!(&copy, docs.id());
        let copied = fs.get(&copy).unwrap();
        assert_eq!(copied.name(), "Docs");
        assert_eq!(copied.children().len(), 1);
        assert_ne!(&copied.children()[0], file.id());
        assert_eq!(fs.entries().count(), 5);
        assert!(fs.copy(docs.id(), Some(docs.id())).is_err());
        assert_consistent(&fs);
    }

    #[test]
    fn defaults_stats_and_preview() {
        let fs = FileSystem::with_defaults();
        let stats = fs.stats();
        assert_eq!(stats.total_folders, 4);
        assert_eq!(stats.total_files, 1);

        let welcome = EntryId::new("file-welcome");
        assert_eq!(stats.total_size, fs.get(&welcome).unwrap().size());
        assert!(fs.preview(&welcome).unwrap().starts_with("Welcome to MominOS!"));
        assert!(fs.preview(&EntryId::new("folder-music")).is_none());
        assert_eq!(fs.download(&welcome).unwrap().name, "Welcome.txt");
    }

    #[test]
    fn scenario_delete_docs_under_root() {
        let mut fs = FileSystem::new();
        let root_entry = crate::entry::Entry::folder(EntryId::new("root"), "Root");
        fs.table.insert(root_entry, None).unwrap();
        let root = EntryId::new("root");

        let docs = fs.create_folder("Docs", Some(&root)).unwrap();
        assert_eq!(docs.parent(), Some(&root));
        assert_eq!(fs.get(&root).unwrap().children(), &[docs.id().clone()]);

        let a = fs.create_file("a.txt", "", Some(docs.id())).unwrap();
        assert_eq!(a.parent(), Some(docs.id()));

        assert!(fs.delete(docs.id()));
        assert!(fs.get(docs.id()).is_none());
        assert!(fs.get(a.id()).is_none());
        assert!(fs.get(&root).unwrap().children().is_empty());
    }
}

#[cfg(test)]
mod explorer_tests {
    use crate::{entry::EntryId, error::Error, explorer::Explorer, FileSystem};

    #[test]
    fn drop_onto_folder_moves_entry() {
        let mut fs = FileSystem::with_defaults();
        let welcome = EntryId::new("file-welcome");
        let documents = EntryId::new("folder-documents");
        let mut explorer = Explorer::new();

        explorer.begin_drag(&welcome);
        explorer.drop_onto(&mut fs, Some(&documents)).unwrap();

        assert_eq!(fs.get(&welcome).unwrap().parent(), Some(&documents));
        assert_eq!(fs.get(&documents).unwrap().children(), &[welcome]);
        assert!(explorer.dragged().is_none());
    }

    #[test]
    fn drop_onto_file_is_rejected() {
        let mut fs = FileSystem::with_defaults();
        let other = fs.create_file("other.txt", "", None).unwrap();
        let welcome = EntryId::new("file-welcome");
        let before = fs.export().unwrap();
        let mut explorer = Explorer::new();

        explorer.begin_drag(&welcome);
        let result = explorer.drop_onto(&mut fs, Some(other.id()));

        assert_eq!(result, Err(Error::NotAFolder(other.id().clone())));
        assert_eq!(fs.export().unwrap(), before);
    }

    #[test]
    fn navigation_and_filter() {
        let mut fs = FileSystem::with_defaults();
        let documents = EntryId::new("folder-documents");
        fs.create_file("report.pdf", "", Some(&documents)).unwrap();
        fs.create_file("photo.jpg", "", Some(&documents)).unwrap();
        let mut explorer = Explorer::new();

        assert_eq!(explorer.listing(&fs).len(), 5);
        assert!(!explorer.open(&fs, &EntryId::new("file-welcome")));
        assert!(explorer.open(&fs, &documents));
        assert_eq!(explorer.location(&fs), "/Documents");

        explorer.set_filter("REP");
        let names: Vec<_> = explorer.listing(&fs).iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["report.pdf"]);

        explorer.back(&fs);
        assert_eq!(explorer.location(&fs), "/");
    }

    #[test]
    fn deleted_current_folder_falls_back_to_root() {
        let mut fs = FileSystem::with_defaults();
        let music = EntryId::new("folder-music");
        let mut explorer = Explorer::new();
        explorer.open(&fs, &music);

        explorer.select(&music);
        assert_eq!(explorer.delete_selection(&mut fs), 1);
        assert_eq!(explorer.current(&fs), None);
        assert_eq!(explorer.listing(&fs).len(), 4);
    }

    #[test]
    fn new_folder_lands_in_current_folder() {
        let mut fs = FileSystem::with_defaults();
        let pictures = EntryId::new("folder-pictures");
        let mut explorer = Explorer::new();
        explorer.open(&fs, &pictures);

        let folder = explorer.new_folder(&mut fs).unwrap();
        assert_eq!(folder.name(), "New Folder");
        assert_eq!(folder.parent(), Some(&pictures));
    }
}

#[cfg(test)]
mod util_tests {
    use crate::{icon::IconCategory, util};

    #[test]
    fn paths_normalize() {
        assert_eq!(util::normalize_path("a//b/./c/../d"), "/a/b/d");
        assert_eq!(util::normalize_path("/.."), "/");
        assert_eq!(util::join_path("/Documents", "../Music"), "/Music");
        assert_eq!(util::join_path("/Documents", "/Pictures"), "/Pictures");
        assert_eq!(
            util::split_name_path("/Documents/a.txt"),
            ("/Documents".to_string(), "a.txt".to_string())
        );
        assert_eq!(
            util::split_name_path("a.txt"),
            ("/".to_string(), "a.txt".to_string())
        );
    }

    #[test]
    fn categories_by_extension() {
        assert_eq!(util::extension(".gitignore"), None);
        assert_eq!(util::extension("archive.TAR.GZ"), Some("gz".to_string()));
        assert_eq!(IconCategory::for_file("photo.JPG"), IconCategory::Image);
        assert_eq!(IconCategory::for_file("clip.mkv"), IconCategory::Video);
        assert_eq!(IconCategory::for_file("data.sqlite"), IconCategory::Database);
        assert_eq!(IconCategory::for_file("mystery"), IconCategory::Document);
    }
}
