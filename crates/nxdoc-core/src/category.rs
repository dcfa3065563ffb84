//! Classification of NXDL definitions.
//!
//! Every definition belongs to one of three categories, determined by the
//! directory it lives in within the definitions repository.

use std::{fmt, path::Path, str::FromStr};

use log::debug;
use thiserror::Error;

/// Error returned when a directory name does not map to a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported definition category `{0}` (expected base_classes, applications or contributed_definitions)")]
pub struct UnknownCategory(pub String);

/// The category of a class definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `base_classes`
    BaseClasses,
    /// `applications`
    Applications,
    /// `contributed_definitions`
    ContributedDefinitions,
}

impl Category {
    /// All categories, in manual order.
    pub const ALL: [Category; 3] = [
        Category::BaseClasses,
        Category::Applications,
        Category::ContributedDefinitions,
    ];

    /// Resolve a category from a directory name such as `base_classes`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] for any other directory name.
    pub fn from_dir_name(dir: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.dir_name() == dir)
            .ok_or_else(|| UnknownCategory(dir.to_string()))
    }

    /// Resolve a category from the directory containing a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] if the file has no containing directory or
    /// the directory name is not recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UnknownCategory> {
        let path = path.as_ref();
        let dir = path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(path = path.display().to_string(), dir; "Resolving definition category");
        Self::from_dir_name(&dir)
    }

    /// Directory name in the definitions repository.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::BaseClasses => "base_classes",
            Category::Applications => "applications",
            Category::ContributedDefinitions => "contributed_definitions",
        }
    }

    /// Label used in the manual.
    pub fn label(&self) -> &'static str {
        match self {
            Category::BaseClasses => "Base Classes",
            Category::Applications => "Application Definitions",
            Category::ContributedDefinitions => "Contributed Definitions",
        }
    }

    /// Value of the `category` attribute on the `definition` root element.
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::BaseClasses => "base",
            Category::Applications => "application",
            Category::ContributedDefinitions => "contributed",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_name(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
