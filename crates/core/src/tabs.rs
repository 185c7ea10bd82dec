//! Tabs

use thiserror::Error;

/// Tab lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// No panel is keyed by the tab name.
    #[error("no tab panel named '{0}'")]
    MissingPanel(String),

    /// No button activates the tab name.
    #[error("no tab button for '{0}'")]
    MissingButton(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    name: String,
    active: bool,
}

impl Marker {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
        }
    }
}

/// Tab panels and the buttons that switch between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    panels: Vec<Marker>,
    buttons: Vec<Marker>,
}

impl TabSet {
    /// One panel and one button per name, none active.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let panels: Vec<Marker> = names.into_iter().map(Marker::new).collect();
        let buttons = panels.clone();

        Self { panels, buttons }
    }

    /// Panels and buttons named independently.
    pub fn with_parts<P, B>(panels: P, buttons: B) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            panels: panels.into_iter().map(Marker::new).collect(),
            buttons: buttons.into_iter().map(Marker::new).collect(),
        }
    }

    /// Deactivate every panel and button, then activate the pair named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TabError`] when the panel or the button is missing. Everything is
    /// deactivated by then, and a found panel stays active when only the button is
    /// missing.
    pub fn switch(&mut self, name: &str) -> Result<(), TabError> {
        for marker in self.panels.iter_mut().chain(self.buttons.iter_mut()) {
            marker.active = false;
        }

        let panel = self
            .panels
            .iter_mut()
            .find(|panel| panel.name == name)
            .ok_or_else(|| TabError::MissingPanel(name.to_string()))?;

        panel.active = true;

        let button = self
            .buttons
            .iter_mut()
            .find(|button| button.name == name)
            .ok_or_else(|| TabError::MissingButton(name.to_string()))?;

        button.active = true;

        Ok(())
    }

    /// Whether the panel named `name` is active.
    pub fn panel_active(&self, name: &str) -> bool {
        self.panels.iter().any(|panel| panel.active && panel.name == name)
    }

    /// Whether the button for `name` is active.
    pub fn button_active(&self, name: &str) -> bool {
        self.buttons
            .iter()
            .any(|button| button.active && button.name == name)
    }

    /// Names of the active panels.
    pub fn active_panels(&self) -> impl Iterator<Item = &str> {
        self.panels
            .iter()
            .filter(|panel| panel.active)
            .map(|panel| panel.name.as_str())
    }

    /// Names of the active buttons.
    pub fn active_buttons(&self) -> impl Iterator<Item = &str> {
        self.buttons
            .iter()
            .filter(|button| button.active)
            .map(|button| button.name.as_str())
    }
}
