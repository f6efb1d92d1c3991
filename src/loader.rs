//! Typed settings loading with tri-state lookup semantics.
//!
//! Each operation reads one `(group, key)` from a [`SettingsStore`], converts
//! the raw value, and writes the caller's slot only when a usable value was
//! found. "Not configured" is success: the slot keeps whatever default the
//! caller put there, and a debug entry goes to the sink. Only a value that is
//! present but unusable fails the call, with a single warning entry.

use crate::error::LoadError;
use crate::input::InputType;
use crate::sink::DiagnosticSink;
use crate::store::{SettingsStore, StoreError};

/// Outcome of one raw lookup after classification.
///
/// Produced and consumed within a single load call; the diagnostic for each
/// arm has already been emitted by the time a `Lookup` exists.
enum Lookup<T> {
    Found(T),
    Absent,
    Malformed(LoadError),
}

/// Typed loader bound to one store and one diagnostic sink.
///
/// Stateless: holds only borrows, so it is cheap to construct per load pass
/// and safe to use from multiple threads as long as the store tolerates
/// shared reads. No operation retains the store or any returned value beyond
/// the call.
pub struct SettingsLoader<'a, S: SettingsStore + ?Sized> {
    store: &'a S,
    sink: &'a dyn DiagnosticSink,
}

impl<'a, S: SettingsStore + ?Sized> SettingsLoader<'a, S> {
    pub fn new(store: &'a S, sink: &'a dyn DiagnosticSink) -> Self {
        Self { store, sink }
    }

    /// Classify a raw store result and emit the matching diagnostic.
    ///
    /// Group-or-key absence is benign and logs at debug level; every other
    /// store failure warns and fails the call.
    fn classify<T>(&self, group: &str, key: &str, res: Result<T, StoreError>) -> Lookup<T> {
        match res {
            Ok(value) => Lookup::Found(value),
            Err(e) if e.is_absence() => {
                self.sink.debug(group, key, &e.to_string());
                Lookup::Absent
            }
            Err(e) => Lookup::Malformed(self.malformed(group, key, e.to_string())),
        }
    }

    /// Emit one warning and build the error handed back to the caller.
    fn malformed(&self, group: &str, key: &str, message: String) -> LoadError {
        self.sink.warning(group, key, &message);
        LoadError::new(group, key, message)
    }

    fn lookup_value(&self, group: &str, key: &str) -> Lookup<String> {
        self.classify(group, key, self.store.get_value(group, key))
    }

    fn lookup_value_list(&self, group: &str, key: &str) -> Lookup<Vec<String>> {
        self.classify(group, key, self.store.get_value_list(group, key))
    }

    /// Load a boolean setting.
    ///
    /// Accepts the keyfile lexicon `true`, `false`, `1`, `0` (exact match
    /// after trimming surrounding whitespace).
    pub fn load_bool(&self, group: &str, key: &str, slot: &mut bool) -> Result<(), LoadError> {
        match self.lookup_value(group, key) {
            Lookup::Found(raw) => {
                let value = match raw.trim() {
                    "true" | "1" => true,
                    "false" | "0" => false,
                    other => {
                        return Err(self.malformed(
                            group,
                            key,
                            format!("invalid boolean value '{other}'"),
                        ));
                    }
                };
                *slot = value;
                Ok(())
            }
            Lookup::Absent => Ok(()),
            Lookup::Malformed(e) => Err(e),
        }
    }

    /// Load a string setting verbatim, no transformation.
    pub fn load_string(&self, group: &str, key: &str, slot: &mut String) -> Result<(), LoadError> {
        match self.lookup_value(group, key) {
            Lookup::Found(raw) => {
                *slot = raw;
                Ok(())
            }
            Lookup::Absent => Ok(()),
            Lookup::Malformed(e) => Err(e),
        }
    }

    /// Load a signed integer setting.
    pub fn load_int(&self, group: &str, key: &str, slot: &mut i32) -> Result<(), LoadError> {
        match self.lookup_value(group, key) {
            Lookup::Found(raw) => match raw.trim().parse::<i32>() {
                Ok(value) => {
                    *slot = value;
                    Ok(())
                }
                Err(e) => Err(self.malformed(
                    group,
                    key,
                    format!("invalid integer value '{}': {e}", raw.trim()),
                )),
            },
            Lookup::Absent => Ok(()),
            Lookup::Malformed(e) => Err(e),
        }
    }

    /// Load an unsigned integer setting via [`Self::load_int`].
    ///
    /// A configured negative value is treated as if the key were absent: the
    /// slot is left untouched and the call still succeeds.
    pub fn load_uint(&self, group: &str, key: &str, slot: &mut u32) -> Result<(), LoadError> {
        let mut value: i32 = -1;
        self.load_int(group, key, &mut value)?;
        if value >= 0 {
            *slot = value as u32;
        }
        Ok(())
    }

    /// Load a list-typed setting verbatim.
    pub fn load_string_list(
        &self,
        group: &str,
        key: &str,
        slot: &mut Vec<String>,
    ) -> Result<(), LoadError> {
        match self.lookup_value_list(group, key) {
            Lookup::Found(list) => {
                *slot = list;
                Ok(())
            }
            Lookup::Absent => Ok(()),
            Lookup::Malformed(e) => Err(e),
        }
    }

    /// Load a command-line setting and split it into spawn-ready arguments.
    ///
    /// Splitting follows POSIX shell word rules (quoting, escaping,
    /// whitespace). An absent key succeeds with the slot untouched. Text
    /// that fails to tokenize (unbalanced quote, trailing backslash) or
    /// yields no words at all is malformed; the slot is never written with
    /// a partial or empty argument vector.
    pub fn load_exec(
        &self,
        group: &str,
        key: &str,
        slot: &mut Vec<String>,
    ) -> Result<(), LoadError> {
        let raw = match self.lookup_value(group, key) {
            Lookup::Found(raw) => raw,
            Lookup::Absent => return Ok(()),
            Lookup::Malformed(e) => return Err(e),
        };

        let argv = match shlex::split(&raw) {
            Some(argv) if !argv.is_empty() => argv,
            Some(_) => return Err(self.malformed(group, key, "command is empty".to_string())),
            None => {
                return Err(self.malformed(group, key, format!("cannot parse command '{raw}'")));
            }
        };

        *slot = argv;
        Ok(())
    }

    /// Load a list of input-type tokens and OR their flags into a mask.
    ///
    /// Unrecognized tokens contribute nothing and are skipped silently. The
    /// mask is computed in full before any write, and the slot is written
    /// only when at least one token matched; a list of only unknown tokens
    /// counts as absent.
    pub fn load_input_mask(
        &self,
        group: &str,
        key: &str,
        slot: &mut u32,
    ) -> Result<(), LoadError> {
        let tokens = match self.lookup_value_list(group, key) {
            Lookup::Found(tokens) => tokens,
            Lookup::Absent => return Ok(()),
            Lookup::Malformed(e) => return Err(e),
        };

        let mask = tokens
            .iter()
            .filter_map(|token| InputType::from_token(token))
            .fold(0u32, |mask, ty| mask | ty.mask());

        if mask != 0 {
            *slot = mask;
        }
        Ok(())
    }
}
