use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LANGUAGE, LANGUAGE_PROFILES_FILE};
use crate::models::Vital;

use super::types::{MonitorError, Severity};

/// Language profiles compiled into the crate ("en" and "de").
const BUNDLED_PROFILES: &str = include_str!("../../resources/language_profiles.json");

/// Low/normal/high phrases for one vital in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrases {
    pub low: String,
    pub normal: String,
    pub high: String,
}

impl Phrases {
    fn is_complete(&self) -> bool {
        !self.low.trim().is_empty() && !self.normal.trim().is_empty() && !self.high.trim().is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawLanguageProfile {
    language: String,
    warning_prefix: String,
    phrases: BTreeMap<Vital, Phrases>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Debug, Deserialize)]
struct RawProfileTable {
    #[serde(default = "default_language")]
    default_language: String,
    profiles: Vec<RawLanguageProfile>,
}

/// Phrase table for one language. Complete for every vital by construction.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: String,
    warning_prefix: String,
    phrases: [Phrases; Vital::COUNT],
}

impl LanguageProfile {
    /// Build a profile, rejecting any vital without a full set of phrases.
    pub fn new(
        language: impl Into<String>,
        warning_prefix: impl Into<String>,
        mut phrases: BTreeMap<Vital, Phrases>,
    ) -> Result<Self, MonitorError> {
        let language = language.into();
        let warning_prefix = warning_prefix.into();
        if warning_prefix.trim().is_empty() {
            return Err(MonitorError::EmptyWarningPrefix(language));
        }

        let ordered = Vital::ALL
            .iter()
            .map(|vital| {
                phrases
                    .remove(vital)
                    .filter(Phrases::is_complete)
                    .ok_or_else(|| MonitorError::MissingTranslation {
                        language: language.clone(),
                        vital: vital.as_str().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let phrases: [Phrases; Vital::COUNT] = ordered
            .try_into()
            .map_err(|_| MonitorError::ReferenceDataParse(language.clone(), "phrase table size".into()))?;

        Ok(Self {
            language,
            warning_prefix,
            phrases,
        })
    }

    /// Parse a single profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, MonitorError> {
        let raw: RawLanguageProfile = serde_json::from_str(json)
            .map_err(|e| MonitorError::ReferenceDataParse("language profile".into(), e.to_string()))?;
        Self::new(raw.language, raw.warning_prefix, raw.phrases)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn warning_prefix(&self) -> &str {
        &self.warning_prefix
    }

    pub fn phrases(&self, vital: Vital) -> &Phrases {
        &self.phrases[vital as usize]
    }

    /// Phrase for a severity. Near outcomes reuse the breach phrase behind the warning prefix.
    pub fn render(&self, vital: Vital, severity: Severity) -> String {
        let phrases = self.phrases(vital);
        match severity {
            Severity::Low => phrases.low.clone(),
            Severity::Normal => phrases.normal.clone(),
            Severity::High => phrases.high.clone(),
            Severity::NearLow => format!("{}{}", self.warning_prefix, phrases.low),
            Severity::NearHigh => format!("{}{}", self.warning_prefix, phrases.high),
        }
    }
}

/// Language profiles keyed by code, with a default used for unknown codes.
#[derive(Debug, Clone)]
pub struct Localizer {
    profiles: BTreeMap<String, LanguageProfile>,
    default: LanguageProfile,
}

impl Localizer {
    pub fn new(
        profiles: impl IntoIterator<Item = LanguageProfile>,
        default_language: &str,
    ) -> Result<Self, MonitorError> {
        let mut by_language = BTreeMap::new();
        for profile in profiles {
            let language = profile.language.clone();
            if by_language.insert(language.clone(), profile).is_some() {
                return Err(MonitorError::DuplicateLanguage(language));
            }
        }
        let profiles = by_language;
        let default = profiles
            .get(default_language)
            .cloned()
            .ok_or_else(|| MonitorError::DefaultLanguageMissing(default_language.to_string()))?;
        Ok(Self { profiles, default })
    }

    /// Profiles shipped with the crate.
    pub fn builtin() -> Result<Self, MonitorError> {
        Self::from_json(BUNDLED_PROFILES, "bundled language profiles")
    }

    /// Load `language_profiles.json` from a resources directory.
    pub fn load(resources_dir: &Path) -> Result<Self, MonitorError> {
        let path = resources_dir.join(LANGUAGE_PROFILES_FILE);
        let json = std::fs::read_to_string(&path).map_err(|e| {
            MonitorError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        Self::from_json(&json, LANGUAGE_PROFILES_FILE)
    }

    fn from_json(json: &str, source: &str) -> Result<Self, MonitorError> {
        let table: RawProfileTable = serde_json::from_str(json)
            .map_err(|e| MonitorError::ReferenceDataParse(source.into(), e.to_string()))?;
        let profiles = table
            .profiles
            .into_iter()
            .map(|raw| LanguageProfile::new(raw.language, raw.warning_prefix, raw.phrases))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(profiles, &table.default_language)
    }

    /// Profile for a language code. Unknown codes fall back to the default profile.
    pub fn profile(&self, language: &str) -> &LanguageProfile {
        match self.profiles.get(language) {
            Some(profile) => profile,
            None => {
                tracing::debug!(
                    requested = language,
                    fallback = self.default.language.as_str(),
                    "No language profile, using default"
                );
                &self.default
            }
        }
    }

    pub fn render(&self, vital: Vital, severity: Severity, language: &str) -> String {
        self.profile(language).render(vital, severity)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn default_language(&self) -> &str {
        &self.default.language
    }
}
