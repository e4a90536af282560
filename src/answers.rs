//! Answer model: the metadata collected for one README and the license table.

use crate::errors::{ReadmeError, Result};
use std::fmt;
use std::str::FromStr;

/// Licenses offered by the prompt, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum License {
    #[default]
    Mit,
    Isc,
    Apache2,
    GplV3,
}

/// Presentation metadata for a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseInfo {
    /// Color name understood by the badge service
    pub badge_color: &'static str,
    /// Path segment under the license reference site
    pub reference_path: &'static str,
}

impl License {
    pub const ALL: [License; 4] = [License::Mit, License::Isc, License::Apache2, License::GplV3];

    /// The literal choice text, which is also what the README displays
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Isc => "ISC",
            Self::Apache2 => "Apache License 2.0",
            Self::GplV3 => "GNU GPLv3",
        }
    }

    pub fn info(&self) -> LicenseInfo {
        match self {
            Self::Mit => LicenseInfo {
                badge_color: "green",
                reference_path: "mit",
            },
            Self::Isc => LicenseInfo {
                badge_color: "blue",
                reference_path: "isc",
            },
            Self::Apache2 => LicenseInfo {
                badge_color: "blueviolet",
                reference_path: "apache-2.0",
            },
            Self::GplV3 => LicenseInfo {
                badge_color: "red",
                reference_path: "gpl-3.0",
            },
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = ReadmeError;

    /// Exact match on the display string; anything else is an unknown license.
    fn from_str(s: &str) -> Result<Self> {
        License::ALL
            .into_iter()
            .find(|license| license.as_str() == s)
            .ok_or_else(|| ReadmeError::UnknownLicense(s.to_string()))
    }
}

/// Look up license metadata by display name.
pub fn license_info_by_name(name: &str) -> Result<LicenseInfo> {
    name.parse::<License>().map(|license| license.info())
}

/// Everything the renderer needs for one README.
///
/// Optional fields hold an empty string when the user skipped them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub title: String,
    pub description: String,
    pub installation: String,
    pub usage: String,
    pub contributing: String,
    pub test: String,
    pub license: License,
    pub username: String,
    pub email: String,
}

impl AnswerSet {
    /// Minimal answer set with every optional field left empty
    pub fn new(title: impl Into<String>, description: impl Into<String>, license: License) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            installation: String::new(),
            usage: String::new(),
            contributing: String::new(),
            test: String::new(),
            license,
            username: String::new(),
            email: String::new(),
        }
    }

    pub fn has_questions(&self) -> bool {
        !self.username.is_empty() || !self.email.is_empty()
    }
}
