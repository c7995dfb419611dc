//! Start menu with an explicit action registry
//!
//! Menu items carry a closed set of action tags; each tag maps to a
//! handler registered at setup time. Activation dispatches through that
//! mapping only, so the full action set is statically enumerable.

use std::collections::HashMap;
use tracing::warn;

use lumen_desktop::ShellEngine;

/// The closed set of start-menu actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Settings,
    Files,
    Search,
    Clock,
}

/// One entry in the start menu
#[derive(Clone, Debug)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
}

type ActionHandler = Box<dyn Fn(&mut ShellEngine, f64)>;

/// The start menu: ordered entries plus the action-to-handler registry
pub struct StartMenu {
    entries: Vec<MenuEntry>,
    handlers: HashMap<MenuAction, ActionHandler>,
}

impl Default for StartMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl StartMenu {
    /// Create an empty menu
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// The menu with every built-in app registered
    pub fn standard() -> Self {
        let mut menu = Self::new();
        menu.register(MenuAction::Settings, "Settings", |shell, now| {
            crate::settings::open(shell, &crate::settings::Settings::default(), now);
        });
        menu.register(MenuAction::Files, "Files", |shell, now| {
            crate::files::open(shell, &[], now);
        });
        menu.register(MenuAction::Search, "Search", |shell, now| {
            crate::search::open(shell, now);
        });
        menu.register(MenuAction::Clock, "Clock", |shell, now| {
            crate::clock::open(shell, 0.0, now);
        });
        menu
    }

    /// Register an entry and its handler; a re-registered action keeps
    /// its menu position and replaces the handler
    pub fn register(
        &mut self,
        action: MenuAction,
        label: &'static str,
        handler: impl Fn(&mut ShellEngine, f64) + 'static,
    ) {
        if !self.entries.iter().any(|e| e.action == action) {
            self.entries.push(MenuEntry { action, label });
        }
        self.handlers.insert(action, Box::new(handler));
    }

    /// Entries in menu order
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Dispatch an action; false if nothing is registered for it
    pub fn activate(&self, action: MenuAction, shell: &mut ShellEngine, now_ms: f64) -> bool {
        match self.handlers.get(&action) {
            Some(handler) => {
                handler(shell, now_ms);
                true
            }
            None => {
                warn!(?action, "start-menu action has no handler");
                false
            }
        }
    }
}
