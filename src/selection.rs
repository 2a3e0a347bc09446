//! The bundle the user picked, if any
//!
//! A caller can reach the "run" action before anything was picked. The
//! selection is kept optional until the moment it is launched, where an empty
//! selection becomes [`LauncherError::NoBundleSelected`].

use crate::error::{LauncherError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BundleSelection {
    #[default]
    None,
    Selected(String),
}

impl BundleSelection {
    /// Build a selection from optional user input
    ///
    /// Blank input counts as nothing picked.
    pub fn from_arg(input: Option<String>) -> Self {
        match input {
            Some(path) if !path.trim().is_empty() => BundleSelection::Selected(path),
            _ => BundleSelection::None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, BundleSelection::Selected(_))
    }

    /// The picked path, or an error when nothing was picked
    pub fn require(&self) -> Result<&str> {
        match self {
            BundleSelection::Selected(path) => Ok(path),
            BundleSelection::None => Err(LauncherError::NoBundleSelected),
        }
    }
}
