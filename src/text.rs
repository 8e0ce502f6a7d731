//! The `Text` facade: dictionaries, functions and template formatting

use std::fmt::Display;
use std::path::Path;

use crate::config::{Mode, TextConfig};
use crate::dictionary::{Dictionary, DictionaryFile, DictionaryManager, DEFAULT};
use crate::error::{Diagnostic, DiagnosticKind, TextError};
use crate::functions::FunctionRegistry;
use crate::parser::{classify, scan, strip, Param, Placeholder};

/// Positional arguments, referenced from templates by index
pub type Args<'a> = [&'a dyn Display];

/// Formats templates against positional arguments, dictionaries and
/// registered functions
///
/// Placeholders:
/// - `{0}` is replaced by the argument at that index
/// - `{name(a, b)}` calls the registered function `name`; a numeric first
///   parameter is replaced by the argument at that index
/// - `{key}` is replaced by the dictionary text under `key`
///
/// Placeholders that cannot be resolved are removed from the output.
///
/// # Example
///
/// ```rust
/// use texting::Text;
///
/// let mut text = Text::new();
/// text.add_dictionary([("greeting", "{gender(0,He,She,They)} has {count(1,cat,cats,cats)}")]);
///
/// assert_eq!(text.get("greeting", &[&"female", &3]), "She has 3 cats");
/// ```
#[derive(Debug)]
pub struct Text {
    dictionaries: DictionaryManager,
    functions: FunctionRegistry,
    config: TextConfig,
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Text {
    /// Create an instance with the built-in `count` and `gender` functions
    pub fn new() -> Self {
        Self::with_config(TextConfig::default())
    }

    /// Create an instance without any registered functions
    pub fn empty() -> Self {
        Self {
            dictionaries: DictionaryManager::new(),
            functions: FunctionRegistry::new(),
            config: TextConfig::default(),
        }
    }

    pub fn with_config(config: TextConfig) -> Self {
        Self {
            dictionaries: DictionaryManager::new(),
            functions: FunctionRegistry::with_builtins(),
            config,
        }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.config.mode = mode;
        self
    }

    /// Install `entries` as the default dictionary
    pub fn add_dictionary<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.add_named_dictionary(DEFAULT, entries)
    }

    /// Install `entries` as the dictionary under `key`, replacing any
    /// previous dictionary with that key
    pub fn add_named_dictionary<K, V>(
        &mut self,
        key: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.dictionaries.insert(Dictionary::new(key, entries));
        self
    }

    /// The active dictionary
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionaries.active()
    }

    pub fn dictionary_by_key(&self, key: &str) -> Option<&Dictionary> {
        self.dictionaries.get(key)
    }

    /// Keys of every installed dictionary, sorted
    pub fn dictionary_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.dictionaries.keys().collect();
        keys.sort_unstable();
        keys
    }

    pub fn active_dictionary_key(&self) -> &str {
        self.dictionaries.active_key()
    }

    /// Select the active dictionary
    ///
    /// An unknown key is reported as a diagnostic and changes nothing.
    pub fn set_dictionary(&mut self, key: &str) -> &mut Self {
        if let Err(kind) = self.dictionaries.set_active(key) {
            self.emit(&[Diagnostic::new(kind)]);
        }
        self
    }

    /// Register a function under `name`, replacing any previous one
    pub fn add_function<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.functions.register(name, function);
        self
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Install every dictionary from a parsed file and apply its settings
    pub fn load_dictionaries(&mut self, file: DictionaryFile) -> &mut Self {
        for dictionary in file.dictionaries {
            self.dictionaries.insert(dictionary);
        }
        if let Some(mode) = file.mode {
            self.set_mode(mode);
        }
        if let Some(active) = file.active {
            self.set_dictionary(&active);
        }
        self
    }

    pub fn load_dictionaries_str(&mut self, content: &str) -> Result<&mut Self, TextError> {
        let file = DictionaryFile::from_str(content)?;
        Ok(self.load_dictionaries(file))
    }

    pub fn load_dictionaries_file(&mut self, path: &Path) -> Result<&mut Self, TextError> {
        let file = DictionaryFile::from_file(path)?;
        Ok(self.load_dictionaries(file))
    }

    /// Format the text stored under `key`
    ///
    /// The key is looked up in the active dictionary first and in the default
    /// dictionary second. A missing key yields `[key]` in dev mode and the
    /// empty string in production mode.
    pub fn get(&self, key: &str, args: &Args<'_>) -> String {
        let (text, diagnostics) = self.get_with_diagnostics(key, args);
        self.emit(&diagnostics);
        text
    }

    /// Like [`Text::get`], returning the diagnostics instead of logging them
    pub fn get_with_diagnostics(&self, key: &str, args: &Args<'_>) -> (String, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let text = self.resolve_key(key, args, &mut Vec::new(), &mut diagnostics);
        (text, diagnostics)
    }

    /// Format the text stored under `key` in one named dictionary
    ///
    /// There is no fallback to the default dictionary. Placeholders inside
    /// the text that reference other keys still resolve through [`Text::get`].
    pub fn get_from_dictionary(
        &self,
        dictionary_key: &str,
        key: &str,
        args: &Args<'_>,
    ) -> Result<String, TextError> {
        let (text, diagnostics) =
            self.get_from_dictionary_with_diagnostics(dictionary_key, key, args)?;
        self.emit(&diagnostics);
        Ok(text)
    }

    /// Like [`Text::get_from_dictionary`], returning the diagnostics instead
    /// of logging them
    pub fn get_from_dictionary_with_diagnostics(
        &self,
        dictionary_key: &str,
        key: &str,
        args: &Args<'_>,
    ) -> Result<(String, Vec<Diagnostic>), TextError> {
        let mut diagnostics = Vec::new();
        let text = match self.dictionaries.find_in(dictionary_key, key)? {
            Ok(template) => {
                let mut expanding = vec![key.to_string()];
                self.resolve_template(template, args, &mut expanding, &mut diagnostics)
            }
            Err(kind) => {
                diagnostics.push(Diagnostic::new(kind));
                self.missing_key(key)
            }
        };
        Ok((text, diagnostics))
    }

    /// Format a template
    ///
    /// # Example
    ///
    /// ```rust
    /// use texting::Text;
    ///
    /// let text = Text::new();
    /// assert_eq!(text.format("{0} {1} {2}", &[&"one", &"two", &"three"]), "one two three");
    /// assert_eq!(text.format("{count(0, script, scripts, scripts)}", &[&5]), "5 scripts");
    /// assert_eq!(text.format("Missing: {0}", &[]), "Missing: ");
    /// ```
    pub fn format(&self, template: &str, args: &Args<'_>) -> String {
        let (text, diagnostics) = self.format_with_diagnostics(template, args);
        self.emit(&diagnostics);
        text
    }

    /// Like [`Text::format`], returning the diagnostics instead of logging
    /// them
    pub fn format_with_diagnostics(
        &self,
        template: &str,
        args: &Args<'_>,
    ) -> (String, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let text = self.resolve_template(template, args, &mut Vec::new(), &mut diagnostics);
        (text, diagnostics)
    }

    /// `expanding` holds the keys whose texts are currently being resolved,
    /// outermost first
    fn resolve_key(
        &self,
        key: &str,
        args: &Args<'_>,
        expanding: &mut Vec<String>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        match self.dictionaries.find(key) {
            Ok(template) => {
                expanding.push(key.to_string());
                let text = self.resolve_template(template, args, expanding, diagnostics);
                expanding.pop();
                text
            }
            Err(kind) => {
                let fallback = match kind {
                    DiagnosticKind::NoDictionary => String::new(),
                    _ => self.missing_key(key),
                };
                diagnostics.push(Diagnostic::new(kind));
                fallback
            }
        }
    }

    /// Substitute every placeholder by position, then strip what is left
    fn resolve_template(
        &self,
        template: &str,
        args: &Args<'_>,
        expanding: &mut Vec<String>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        if template.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(template.len());
        let mut cursor = 0;

        for span in scan(template) {
            let body = &template[span.start + 1..span.end - 1];

            let replacement = match classify(body) {
                Placeholder::Index(index) => match args.get(index) {
                    Some(arg) => Some(arg.to_string()),
                    None => {
                        diagnostics.push(Diagnostic::at(
                            DiagnosticKind::MissingArgument { index },
                            template,
                            span.clone(),
                        ));
                        None
                    }
                },
                Placeholder::Call { name, params } => {
                    let params = resolve_params(&params, args);
                    let result = self.functions.call(name, &params);
                    if result.is_none() {
                        diagnostics.push(Diagnostic::at(
                            DiagnosticKind::UnknownFunction {
                                name: name.to_string(),
                            },
                            template,
                            span.clone(),
                        ));
                    }
                    result
                }
                Placeholder::Key(key) if expanding.iter().any(|k| k == key) => {
                    let chain = expanding
                        .iter()
                        .map(String::as_str)
                        .chain([key])
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    diagnostics.push(Diagnostic::at(
                        DiagnosticKind::CircularReference { chain },
                        template,
                        span.clone(),
                    ));
                    None
                }
                Placeholder::Key(key) if expanding.len() >= self.config.max_depth => {
                    diagnostics.push(Diagnostic::at(
                        DiagnosticKind::RecursionLimit {
                            key: key.to_string(),
                            limit: self.config.max_depth,
                        },
                        template,
                        span.clone(),
                    ));
                    None
                }
                Placeholder::Key(key) => {
                    Some(self.resolve_key(key, args, expanding, diagnostics))
                }
                Placeholder::Unrecognized => None,
            };

            out.push_str(&template[cursor..span.start]);
            match replacement {
                Some(value) => out.push_str(&value),
                None => out.push_str(&template[span.clone()]),
            }
            cursor = span.end;
        }
        out.push_str(&template[cursor..]);

        strip(&out)
    }

    fn missing_key(&self, key: &str) -> String {
        match self.config.mode {
            Mode::Dev => format!("[{}]", key),
            Mode::Production => String::new(),
        }
    }

    fn emit(&self, diagnostics: &[Diagnostic]) {
        if !self.config.mode.is_dev() {
            return;
        }
        for diagnostic in diagnostics {
            log::warn!("{}", diagnostic);
        }
    }
}

/// Turn raw parameters into function arguments
///
/// A positional first parameter without a matching argument becomes the
/// empty string.
fn resolve_params(params: &[Param<'_>], args: &Args<'_>) -> Vec<String> {
    params
        .iter()
        .map(|param| match param {
            Param::Index(index) => args
                .get(*index)
                .map(|arg| arg.to_string())
                .unwrap_or_default(),
            Param::Literal(raw) => raw.to_string(),
        })
        .collect()
}
