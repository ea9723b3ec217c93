use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppKind;

/// The id of an open window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(Uuid);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for WindowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A width and height in css pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The position and size of a window on the desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }
}

/// Which half of the screen a window is snapped to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snap {
    #[default]
    None,
    Left,
    Right,
}

/// The visible state of a window.
/// Minimized wins over maximized, snapping is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// A window to be opened. The manager assigns the id and z-index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    pub app: AppKind,
    pub geometry: Geometry,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default)]
    pub snapped: Snap,
}

impl WindowSpec {
    /// A normal window for the app at the position
    pub fn for_app(app: AppKind, x: i32, y: i32) -> Self {
        Self {
            title: app.title().to_string(),
            app,
            geometry: Geometry::new(x, y, app.default_size()),
            minimized: false,
            maximized: false,
            snapped: Snap::None,
        }
    }
}

/// A partial update of a window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub minimized: Option<bool>,
    #[serde(default)]
    pub maximized: Option<bool>,
    #[serde(default)]
    pub snapped: Option<Snap>,
}

/// An open window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) app: AppKind,
    pub(crate) geometry: Geometry,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    pub(crate) snapped: Snap,
    pub(crate) z_index: u64,
}

impl Window {
    pub(crate) fn open(spec: WindowSpec, z_index: u64) -> Self {
        Self {
            id: WindowId::new(),
            title: spec.title,
            app: spec.app,
            geometry: spec.geometry,
            minimized: spec.minimized,
            maximized: spec.maximized,
            snapped: spec.snapped,
            z_index,
        }
    }

    pub(crate) fn apply(&mut self, patch: WindowPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(geometry) = patch.geometry {
            self.geometry = geometry;
        }
        if let Some(minimized) = patch.minimized {
            self.minimized = minimized;
        }
        if let Some(maximized) = patch.maximized {
            self.maximized = maximized;
        }
        if let Some(snapped) = patch.snapped {
            self.snapped = snapped;
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn app(&self) -> AppKind {
        self.app
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn snapped(&self) -> Snap {
        self.snapped
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }
}
