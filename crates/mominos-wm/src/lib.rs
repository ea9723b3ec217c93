//! Window management for the desktop.
//! Windows are stacked by a z-index counter that only ever grows, so the most recently
//! focused window always sits on top.
use app::AppKind;
use error::Error;
use window::{Geometry, Size, Snap, Window, WindowId, WindowPatch, WindowSpec};

pub mod app;
pub mod error;
pub mod window;

/// The window manager.
/// Owns every open window and decides which one has focus.
#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: Vec<Window>,
    active: Option<WindowId>,
    next_z_index: u64,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_z_index: 1,
        }
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window on top of all others and focus it
    pub fn add_window(&mut self, spec: WindowSpec) -> WindowId {
        let window = Window::open(spec, self.take_z_index());
        let id = window.id;
        log::debug!("Opened {} window {}", window.app.title(), id);
        self.windows.push(window);
        self.active = Some(id);
        id
    }

    /// Merge a partial update into a window. Unknown ids are ignored.
    /// Minimizing through a patch drops focus the same way [`WindowManager::minimize`] does.
    pub fn update_window(&mut self, id: WindowId, patch: WindowPatch) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.apply(patch);
        let minimized = window.minimized;
        if minimized && self.active == Some(id) {
            self.active = None;
        }
        true
    }

    /// Close a window.
    /// If it had focus nothing has focus afterwards, the caller picks the next window.
    pub fn remove_window(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
        before != self.windows.len()
    }

    /// Raise a window above all others and focus it
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let z_index = self.take_z_index();
        if let Ok(window) = self.window_mut(id) {
            window.z_index = z_index;
        }
        self.active = Some(id);
        true
    }

    /// Focus a window, raising it to the top, or drop focus with `None`.
    /// Focusing an unknown window drops focus too.
    pub fn set_active(&mut self, id: Option<WindowId>) {
        match id {
            Some(id) if self.bring_to_front(id) => {}
            _ => self.active = None,
        }
    }

    /// Close every window. The z-index counter keeps counting from where it was.
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.active = None;
    }

    /// Minimize a window. A minimized window cannot keep focus.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.minimized = true;
        if self.active == Some(id) {
            self.active = None;
        }
        true
    }

    /// Bring a minimized window back and focus it
    pub fn restore(&mut self, id: WindowId) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.minimized = false;
        self.bring_to_front(id)
    }

    /// Switch between maximized and normal
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.maximized = !window.maximized;
        true
    }

    /// Snap a window to a screen half, or release it with [`Snap::None`]
    pub fn snap(&mut self, id: WindowId, snap: Snap) -> bool {
        self.update_window(
            id,
            WindowPatch {
                snapped: Some(snap),
                ..WindowPatch::default()
            },
        )
    }

    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.geometry.x = x;
        window.geometry.y = y;
        true
    }

    pub fn resize(&mut self, id: WindowId, size: Size) -> bool {
        let Ok(window) = self.window_mut(id) else {
            return false;
        };
        window.geometry = Geometry::new(window.geometry.x, window.geometry.y, size);
        true
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// The windows in the order they were opened
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// The windows of one app
    pub fn windows_of(&self, app: AppKind) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(move |w| w.app == app)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active_window(&self) -> Option<&Window> {
        self.active.and_then(|id| self.get(id))
    }

    /// The windows from bottom to top
    pub fn stacking(&self) -> Vec<&Window> {
        let mut stack: Vec<&Window> = self.windows.iter().collect();
        stack.sort_by_key(|w| w.z_index);
        stack
    }

    /// The highest window that is not minimized
    pub fn topmost(&self) -> Option<&Window> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }

    /// The z-index the next focused window will get
    pub fn next_z_index(&self) -> u64 {
        self.next_z_index
    }

    fn take_z_index(&mut self) -> u64 {
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        z_index
    }

    fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, Error> {
        self.windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(Error::NoSuchWindow(id))
    }
}
