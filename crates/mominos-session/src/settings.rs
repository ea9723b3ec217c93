use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

/// The user's preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub theme: Theme,
    pub accent_color: String,
    pub dock_position: DockPosition,
    pub animations: bool,
    pub sound: bool,
    pub notifications: bool,
    pub auto_save: bool,
    pub language: String,
    pub timezone: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent_color: "#8b5cf6".to_string(),
            dock_position: DockPosition::Bottom,
            animations: true,
            sound: true,
            notifications: true,
            auto_save: true,
            language: "en".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

/// A partial update of the settings, fields left out keep their value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub accent_color: Option<String>,
    pub dock_position: Option<DockPosition>,
    pub animations: Option<bool>,
    pub sound: Option<bool>,
    pub notifications: Option<bool>,
    pub auto_save: Option<bool>,
    pub language: Option<String>,
    pub timezone: Option<String>,
}

impl UserSettings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(accent_color) = patch.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(dock_position) = patch.dock_position {
            self.dock_position = dock_position;
        }
        if let Some(animations) = patch.animations {
            self.animations = animations;
        }
        if let Some(sound) = patch.sound {
            self.sound = sound;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(auto_save) = patch.auto_save {
            self.auto_save = auto_save;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(timezone) = patch.timezone {
            self.timezone = timezone;
        }
    }
}
