//! A small shell over the virtual file system.
use chrono::{DateTime, Utc};
use mominos_fs::{
    entry::EntryId,
    error::Error,
    util::{join_path, split_name_path},
    EntryPatch, FileSystem,
};
use serde::Serialize;

const HELP: &str = "Available commands:
help        - Show this help message
clear       - Clear the terminal
ls          - List directory contents
pwd         - Print working directory
cd          - Change directory
date        - Show current date and time
echo        - Echo text, `echo text > file` writes a file
whoami      - Show current user
uname       - System information
history     - Show command history
mkdir       - Create directory
touch       - Create file
cat         - Display file contents
mv          - Move or rename files
rm          - Remove files, `rm -r` for folders";

/// What a command printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Output {
    Text(String),
    Error(String),
    Clear,
}

impl Output {
    fn error(command: &str, message: impl std::fmt::Display) -> Self {
        Self::Error(format!("{}: {}", command, message))
    }
}

/// A terminal session with its own working directory and history
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    cwd: Option<EntryId>,
    history: Vec<String>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// The working directory. Falls back to the root if it was deleted.
    pub fn pwd(&self, fs: &FileSystem) -> String {
        self.cwd
            .as_ref()
            .and_then(|id| fs.path_of(id))
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run one command line
    pub fn run(&mut self, fs: &mut FileSystem, user: &str, line: &str, now: DateTime<Utc>) -> Output {
        let line = line.trim();
        if line.is_empty() {
            return Output::Text(String::new());
        }
        self.history.push(line.to_string());

        let args: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = (args[0], &args[1..]);
        match command {
            "help" => Output::Text(HELP.to_string()),
            "clear" => Output::Clear,
            "ls" => self.ls(fs, args.first().copied()),
            "pwd" => Output::Text(self.pwd(fs)),
            "cd" => self.cd(fs, args.first().copied()),
            "mkdir" => self.mkdir(fs, args.first().copied()),
            "touch" => self.touch(fs, args.first().copied()),
            "cat" => self.cat(fs, args.first().copied()),
            "rm" => self.rm(fs, args),
            "mv" => self.mv(fs, args),
            "echo" => self.echo(fs, args),
            "whoami" => Output::Text(user.to_string()),
            "date" => Output::Text(now.format("%a %b %d %Y %H:%M:%S GMT+0000").to_string()),
            "uname" => Output::Text("MominOS 1.0.0 x86_64".to_string()),
            "history" => Output::Text(
                self.history
                    .iter()
                    .enumerate()
                    .map(|(i, cmd)| format!("{}  {}", i + 1, cmd))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            other => Output::Error(format!("{}: command not found", other)),
        }
    }

    fn resolve(&self, fs: &FileSystem, path: &str) -> Result<Option<EntryId>, Error> {
        let path = match path {
            "~" => "/".to_string(),
            _ => join_path(&self.pwd(fs), path),
        };
        fs.resolve(&path)
    }

    /// The folder a new entry at `path` goes into, and its name
    fn parent_of(&self, fs: &FileSystem, path: &str) -> Result<(Option<EntryId>, String), Error> {
        let (dir, name) = split_name_path(&join_path(&self.pwd(fs), path));
        let parent = fs.resolve(&dir)?;
        if let Some(parent) = &parent {
            if !fs.get(parent).map(|e| e.is_folder()).unwrap_or(false) {
                return Err(Error::NotAFolder(parent.clone()));
            }
        }
        Ok((parent, name))
    }

    fn ls(&self, fs: &FileSystem, path: Option<&str>) -> Output {
        let target = match path {
            Some(path) => match self.resolve(fs, path) {
                Ok(target) => target,
                Err(e) => return Output::error("ls", e),
            },
            None => self.cwd.clone().filter(|id| fs.get(id).is_some()),
        };
        if let Some(entry) = target.as_ref().and_then(|id| fs.get(id)) {
            if !entry.is_folder() {
                return Output::Text(entry.name().to_string());
            }
        }
        let listing = fs
            .list(target.as_ref())
            .into_iter()
            .map(|entry| {
                if entry.is_folder() {
                    format!("{}/", entry.name())
                } else {
                    entry.name().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        Output::Text(listing)
    }

    fn cd(&mut self, fs: &FileSystem, path: Option<&str>) -> Output {
        let target = match path {
            None | Some("~") | Some("/") => None,
            Some(path) => match self.resolve(fs, path) {
                Ok(target) => target,
                Err(_) => return Output::error("cd", format!("no such directory: {}", path)),
            },
        };
        if let Some(entry) = target.as_ref().and_then(|id| fs.get(id)) {
            if !entry.is_folder() {
                return Output::error("cd", format!("not a directory: {}", entry.name()));
            }
        }
        self.cwd = target;
        Output::Text(String::new())
    }

    fn mkdir(&self, fs: &mut FileSystem, path: Option<&str>) -> Output {
        let Some(path) = path else {
            return Output::error("mkdir", "missing directory name");
        };
        let created = self
            .parent_of(fs, path)
            .and_then(|(parent, name)| fs.create_folder(&name, parent.as_ref()));
        match created {
            Ok(folder) => Output::Text(format!("Directory '{}' created", folder.name())),
            Err(e) => Output::error("mkdir", e),
        }
    }

    fn touch(&self, fs: &mut FileSystem, path: Option<&str>) -> Output {
        let Some(path) = path else {
            return Output::error("touch", "missing file name");
        };
        if let Ok(Some(existing)) = self.resolve(fs, path) {
            fs.update_file(&existing, EntryPatch::default());
            return Output::Text(String::new());
        }
        let created = self
            .parent_of(fs, path)
            .and_then(|(parent, name)| fs.create_file(&name, "", parent.as_ref()));
        match created {
            Ok(file) => Output::Text(format!("File '{}' created", file.name())),
            Err(e) => Output::error("touch", e),
        }
    }

    fn cat(&self, fs: &FileSystem, path: Option<&str>) -> Output {
        let Some(path) = path else {
            return Output::error("cat", "missing file name");
        };
        let entry = match self.resolve(fs, path) {
            Ok(Some(id)) => fs.get(&id),
            _ => None,
        };
        match entry {
            Some(entry) if entry.is_folder() => Output::error("cat", format!("{}: Is a directory", path)),
            Some(entry) => Output::Text(entry.content().unwrap_or_default().to_string()),
            None => Output::error("cat", format!("{}: No such file or directory", path)),
        }
    }

    fn rm(&self, fs: &mut FileSystem, args: &[&str]) -> Output {
        let recursive = args.iter().any(|a| matches!(*a, "-r" | "-rf" | "-fr"));
        let Some(path) = args.iter().find(|a| !a.starts_with('-')) else {
            return Output::error("rm", "missing operand");
        };
        let id = match self.resolve(fs, path) {
            Ok(Some(id)) => id,
            Ok(None) => return Output::error("rm", "refusing to remove '/'"),
            Err(_) => {
                return Output::error("rm", format!("cannot remove '{}': No such file or directory", path))
            }
        };
        if fs.get(&id).map(|e| e.is_folder()).unwrap_or(false) && !recursive {
            return Output::error("rm", format!("cannot remove '{}': Is a directory", path));
        }
        fs.delete(&id);
        Output::Text(String::new())
    }

    fn mv(&self, fs: &mut FileSystem, args: &[&str]) -> Output {
        let [source, target] = args else {
            return Output::error("mv", "usage: mv <source> <target>");
        };
        let id = match self.resolve(fs, source) {
            Ok(Some(id)) => id,
            _ => return Output::error("mv", format!("cannot stat '{}': No such file or directory", source)),
        };

        let moved = match self.resolve(fs, target) {
            // Moving into an existing folder keeps the name
            Ok(None) => fs.try_move(&id, None),
            Ok(Some(folder)) if fs.get(&folder).map(|e| e.is_folder()).unwrap_or(false) => {
                fs.try_move(&id, Some(&folder))
            }
            Ok(Some(_)) => return Output::error("mv", format!("'{}' already exists", target)),
            Err(_) => self.parent_of(fs, target).and_then(|(parent, name)| {
                fs.try_move(&id, parent.as_ref())?;
                fs.try_update_file(
                    &id,
                    EntryPatch {
                        name: Some(name),
                        content: None,
                    },
                )
            }),
        };
        match moved {
            Ok(()) => Output::Text(String::new()),
            Err(e) => Output::error("mv", e),
        }
    }

    fn echo(&self, fs: &mut FileSystem, args: &[&str]) -> Output {
        let Some(split) = args.iter().position(|a| *a == ">") else {
            return Output::Text(args.join(" "));
        };
        let text = args[..split].join(" ");
        let Some(path) = args.get(split + 1) else {
            return Output::error("echo", "missing file name");
        };

        let written = match self.resolve(fs, path) {
            Ok(Some(id)) => fs.try_update_file(
                &id,
                EntryPatch {
                    name: None,
                    content: Some(text),
                },
            ),
            _ => self
                .parent_of(fs, path)
                .and_then(|(parent, name)| fs.create_file(&name, &text, parent.as_ref()))
                .map(|_| ()),
        };
        match written {
            Ok(()) => Output::Text(String::new()),
            Err(e) => Output::error("echo", e),
        }
    }
}
