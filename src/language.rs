use isolang::Language;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SelectionError;

/// Target languages offered by the translator picker
///
/// Variants are declared in the order the picker lists them. Each language
/// carries a user-facing label and the data value that is sent to the
/// provider and written to the history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TargetLanguage {
    English,
    #[default]
    Kannada,
    Hindi,
    Tamil,
    Malayalam,
    Bengali,
    Odisha,
    Marathi,
    Punjabi,
}

impl TargetLanguage {
    /// All languages in picker order
    pub fn all() -> &'static [TargetLanguage] {
        &[
            Self::English,
            Self::Kannada,
            Self::Hindi,
            Self::Tamil,
            Self::Malayalam,
            Self::Bengali,
            Self::Odisha,
            Self::Marathi,
            Self::Punjabi,
        ]
    }

    /// Label shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Kannada => "Kannada",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Malayalam => "Malayalam",
            Self::Bengali => "Bengali",
            Self::Odisha => "Odisha",
            Self::Marathi => "Marathi",
            Self::Punjabi => "Punjabi",
        }
    }

    /// Data value used in the provider directive and the `language` column
    ///
    /// Odisha ships with the lowercase, differently spelled value `odisa`.
    /// It is kept as-is until product confirms the intended value; see
    /// [`TargetLanguage::has_conventional_value`].
    pub fn value(&self) -> &'static str {
        match self {
            Self::Odisha => "odisa",
            other => other.label(),
        }
    }

    /// Whether the data value follows the capitalized-label convention of its siblings
    pub fn has_conventional_value(&self) -> bool {
        self.value() == self.label()
    }

    /// ISO 639-1 code of the language
    pub fn iso_639_1(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Kannada => "kn",
            Self::Hindi => "hi",
            Self::Tamil => "ta",
            Self::Malayalam => "ml",
            Self::Bengali => "bn",
            Self::Odisha => "or",
            Self::Marathi => "mr",
            Self::Punjabi => "pa",
        }
    }

    /// The matching `isolang` entry
    pub fn iso_language(&self) -> Option<Language> {
        Language::from_639_1(self.iso_639_1())
    }

    /// Log a warning when a language with a flagged data value gets selected
    pub(crate) fn warn_if_unconventional(&self) {
        if !self.has_conventional_value() {
            warn!(
                "Language '{}' is backed by the inconsistent data value '{}'",
                self.label(),
                self.value()
            );
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TargetLanguage {
    type Err = SelectionError;

    /// Accepts either the picker label or the data value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.label() == s || lang.value() == s)
            .ok_or_else(|| SelectionError::InvalidSelection {
                kind: "language",
                value: s.to_string(),
            })
    }
}
