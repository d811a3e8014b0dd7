//! Localized notecard label patterns.
//!
//! Each locale translates the three notecard labels (note, warning, callout).
//! A [`LocalePattern`] recognises a paragraph that starts with one of those
//! labels in bold, e.g. `**Remarque :** …`, and reports which canonical
//! [`NotecardKind`] it stands for.
//!
//! Label data comes from a [`LabelSource`]. [`PatternCache`] loads it once, on
//! first need, and resolves a locale with an explicit fallback to
//! [`DEFAULT_LOCALE`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::Deserialize;

use crate::error::LocaleError;

/// Locale used when a document's locale has no labels.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Canonical notecard kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotecardKind {
    Note,
    Warning,
    Callout,
}

impl NotecardKind {
    pub const ALL: [Self; 3] = [Self::Note, Self::Warning, Self::Callout];

    /// Lower-case English name, used as the `notecardType` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Callout => "callout",
        }
    }

    /// Translation key holding this kind's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Note => "card_note_label",
            Self::Warning => "card_warning_label",
            Self::Callout => "card_callout_label",
        }
    }
}

/// Translated labels for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub note: String,
    pub warning: String,
    pub callout: String,
}

impl Labels {
    #[must_use]
    pub fn new(
        note: impl Into<String>,
        warning: impl Into<String>,
        callout: impl Into<String>,
    ) -> Self {
        Self {
            note: note.into(),
            warning: warning.into(),
            callout: callout.into(),
        }
    }

    #[must_use]
    pub fn get(&self, kind: NotecardKind) -> &str {
        match kind {
            NotecardKind::Note => &self.note,
            NotecardKind::Warning => &self.warning,
            NotecardKind::Callout => &self.callout,
        }
    }
}

/// Provider of per-locale label translations.
pub trait LabelSource: Send + Sync {
    /// Load labels for every available locale.
    fn load(&self) -> Result<Vec<(String, Labels)>, LocaleError>;
}

/// English labels only, registered as [`DEFAULT_LOCALE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinLabels;

impl LabelSource for BuiltinLabels {
    fn load(&self) -> Result<Vec<(String, Labels)>, LocaleError> {
        Ok(vec![(
            DEFAULT_LOCALE.to_owned(),
            Labels::new("Note:", "Warning:", "Callout:"),
        )])
    }
}

/// Labels held in memory, keyed by locale.
#[derive(Debug, Default, Clone)]
pub struct StaticLabels {
    entries: Vec<(String, Labels)>,
}

impl StaticLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, labels: Labels) -> Self {
        self.entries.push((locale.into(), labels));
        self
    }
}

impl LabelSource for StaticLabels {
    fn load(&self) -> Result<Vec<(String, Labels)>, LocaleError> {
        Ok(self.entries.clone())
    }
}

/// Gettext-style JSON catalogs, one `<locale>.json` file per locale.
///
/// ```json
/// {"translations": {"": {"card_note_label": {"msgstr": ["Note:"]}}}}
/// ```
///
/// Files without the default (`""`) context are skipped.
#[derive(Debug, Clone)]
pub struct JsonLabelSource {
    dir: PathBuf,
}

#[derive(Deserialize)]
struct Catalog {
    translations: HashMap<String, HashMap<String, Message>>,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    msgstr: Vec<String>,
}

impl JsonLabelSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Localization directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_catalog(path: &Path) -> Result<Catalog, LocaleError> {
        let data = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| LocaleError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl LabelSource for JsonLabelSource {
    fn load(&self) -> Result<Vec<(String, Labels)>, LocaleError> {
        let io_err = |source| LocaleError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut locales = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let mut catalog = Self::read_catalog(&path)?;
            let Some(messages) = catalog.translations.remove("") else {
                tracing::debug!(path = %path.display(), "Skipping catalog without default context");
                continue;
            };

            let label = |kind: NotecardKind| {
                messages
                    .get(kind.label_key())
                    .and_then(|msg| msg.msgstr.first())
                    .cloned()
                    .ok_or_else(|| LocaleError::MissingLabel {
                        locale: locale.to_owned(),
                        key: kind.label_key().to_owned(),
                    })
            };
            let labels = Labels::new(
                label(NotecardKind::Note)?,
                label(NotecardKind::Warning)?,
                label(NotecardKind::Callout)?,
            );
            locales.push((locale.to_owned(), labels));
        }

        Ok(locales)
    }
}

/// Strip colons (ASCII and full-width) and spaces, then lower-case.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ':' | ' ' | '：'))
        .collect::<String>()
        .to_lowercase()
}

/// Compiled label matcher for one locale.
#[derive(Debug, Clone)]
pub struct LocalePattern {
    regex: Regex,
}

impl LocalePattern {
    /// Compile a pattern from translated labels.
    ///
    /// `locale` is only used in error messages.
    pub fn new(locale: &str, labels: &Labels) -> Result<Self, LocaleError> {
        let mut alternatives = Vec::with_capacity(NotecardKind::ALL.len());
        for kind in NotecardKind::ALL {
            let label = normalize_label(labels.get(kind));
            if label.is_empty() {
                return Err(LocaleError::MissingLabel {
                    locale: locale.to_owned(),
                    key: kind.label_key().to_owned(),
                });
            }
            alternatives.push(format!("(?P<{}>{})", kind.as_str(), regex::escape(&label)));
        }
        let regex = Regex::new(&format!(
            r"(?i)^\*\*(?:{}).*\*\* *",
            alternatives.join("|")
        ))?;
        Ok(Self { regex })
    }

    /// Kind of the bold label that `text` starts with, if any.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<NotecardKind> {
        let captures = self.regex.captures(text)?;
        NotecardKind::ALL
            .into_iter()
            .find(|kind| captures.name(kind.as_str()).is_some())
    }
}

/// How a locale was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The requested locale has its own labels.
    Exact,
    /// The requested locale is unknown; [`DEFAULT_LOCALE`] was used.
    Fallback,
}

/// Result of [`PatternCache::resolve`].
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub pattern: &'a LocalePattern,
    pub resolution: Resolution,
}

/// Lazily built locale → pattern map.
///
/// The label source is read the first time a pattern is needed. A failed
/// build is reported to that caller and attempted again on the next call.
pub struct PatternCache {
    source: Box<dyn LabelSource>,
    patterns: OnceCell<HashMap<String, LocalePattern>>,
}

impl PatternCache {
    #[must_use]
    pub fn new<S: LabelSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            patterns: OnceCell::new(),
        }
    }

    fn patterns(&self) -> Result<&HashMap<String, LocalePattern>, LocaleError> {
        self.patterns.get_or_try_init(|| {
            let mut patterns = HashMap::new();
            for (locale, labels) in self.source.load()? {
                let pattern = LocalePattern::new(&locale, &labels)?;
                patterns.insert(locale, pattern);
            }
            tracing::info!(locales = patterns.len(), "Loaded notecard label patterns");
            Ok(patterns)
        })
    }

    /// Pattern for `locale`, falling back to [`DEFAULT_LOCALE`].
    pub fn resolve(&self, locale: &str) -> Result<Resolved<'_>, LocaleError> {
        let patterns = self.patterns()?;
        if let Some(pattern) = patterns.get(locale) {
            return Ok(Resolved {
                pattern,
                resolution: Resolution::Exact,
            });
        }
        patterns
            .get(DEFAULT_LOCALE)
            .map(|pattern| Resolved {
                pattern,
                resolution: Resolution::Fallback,
            })
            .ok_or_else(|| LocaleError::MissingDefault(DEFAULT_LOCALE.to_owned()))
    }

    /// Loaded locales, sorted.
    pub fn locales(&self) -> Result<Vec<String>, LocaleError> {
        let mut locales: Vec<String> = self.patterns()?.keys().cloned().collect();
        locales.sort();
        Ok(locales)
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("loaded", &self.patterns.get().is_some())
            .finish_non_exhaustive()
    }
}
