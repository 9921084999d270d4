use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Presentation mode negotiated between the host and the embedded app.
///
/// Variants are ordered by their wire code, which is also the order used
/// when validating parameter combinations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Layout {
    /// The embedded app fills the whole view.
    #[default]
    FullClient,
    /// The host shows one of its own pages; the embedded app is hidden.
    FullHost,
    /// Split view, the host side accepts interaction.
    SplitInteractive,
    /// Split view, read-only host side.
    SplitReadOnly,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::FullClient,
        Layout::FullHost,
        Layout::SplitInteractive,
        Layout::SplitReadOnly,
    ];

    pub fn code(self) -> u8 {
        match self {
            Layout::FullClient => 0,
            Layout::FullHost => 1,
            Layout::SplitInteractive => 2,
            Layout::SplitReadOnly => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.code() == code)
    }

    /// Parses the value of a `dcs-layout` query parameter.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| ValidationError::InvalidLayout {
                value: value.to_owned(),
            })
    }

    pub fn is_interactive(self) -> bool {
        self == Layout::SplitInteractive
    }

    /// Whether routes with this layout identify their page by `pageName`.
    pub fn has_page_name(self) -> bool {
        self != Layout::FullHost
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for Layout {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| ValidationError::InvalidLayout {
            value: code.to_string(),
        })
    }
}

impl From<Layout> for u8 {
    fn from(layout: Layout) -> Self {
        layout.code()
    }
}
