//! Typed settings loading for the vigil session daemon.
//!
//! Reads named keys from grouped sections of a parsed config document and
//! converts each raw value into a strongly typed setting. A key that is not
//! configured leaves the caller's default in place and succeeds; a key whose
//! value cannot convert fails the call with a warning. Diagnostics flow
//! through an injected [`DiagnosticSink`] rather than a global logger.
//!
//! ```
//! use vigil_settings::{SettingsLoader, TomlStore, TracingSink};
//!
//! let store = TomlStore::parse("[idle]\nenabled = true\nseconds = 300\n").unwrap();
//! let loader = SettingsLoader::new(&store, &TracingSink);
//!
//! let mut enabled = false;
//! let mut seconds: u32 = 600;
//! loader.load_bool("idle", "enabled", &mut enabled).unwrap();
//! loader.load_uint("idle", "seconds", &mut seconds).unwrap();
//! loader.load_uint("idle", "missing", &mut seconds).unwrap(); // keeps 300
//!
//! assert!(enabled);
//! assert_eq!(seconds, 300);
//! ```

pub mod error;
pub mod input;
pub mod loader;
pub mod sink;
pub mod store;

pub use error::LoadError;
pub use input::{INPUT_TYPES, InputType};
pub use loader::SettingsLoader;
pub use sink::{DiagnosticSink, RecordingSink, Severity, SinkEntry, TracingSink};
pub use store::{SettingsStore, StoreError, TomlStore};
