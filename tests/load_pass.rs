//! Full load pass over a realistic config document, the way a session
//! daemon resolves its settings struct at startup.

use vigil_settings::{
    InputType, RecordingSink, SettingsLoader, SettingsStore, Severity, StoreError, TomlStore,
};

const CONFIG: &str = r#"
[idle]
enabled = true
seconds = 300
inputs = ["keyboard", "mouse", "spaceball"]

[lock]
on-idle = false
exec = "xsecurelock -- systemctl suspend"

[dpms]
standby = -1
"#;

/// Caller-owned settings with compiled-in defaults, loader-overridden.
#[derive(Debug, PartialEq)]
struct Settings {
    idle_enabled: bool,
    idle_seconds: u32,
    idle_inputs: u32,
    lock_on_idle: bool,
    lock_exec: Vec<String>,
    dpms_standby: u32,
    hook_exec: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idle_enabled: false,
            idle_seconds: 600,
            idle_inputs: InputType::Keyboard.mask(),
            lock_on_idle: true,
            lock_exec: Vec::new(),
            dpms_standby: 900,
            hook_exec: Vec::new(),
        }
    }
}

impl Settings {
    /// Load every setting, aggregating per-call results the way a daemon
    /// decides startup success. Absent keys keep their defaults.
    fn load(store: &dyn SettingsStore, sink: &RecordingSink) -> (Self, bool) {
        let loader = SettingsLoader::new(store, sink);
        let mut s = Self::default();
        let mut ok = true;

        ok &= loader.load_bool("idle", "enabled", &mut s.idle_enabled).is_ok();
        ok &= loader.load_uint("idle", "seconds", &mut s.idle_seconds).is_ok();
        ok &= loader.load_input_mask("idle", "inputs", &mut s.idle_inputs).is_ok();
        ok &= loader.load_bool("lock", "on-idle", &mut s.lock_on_idle).is_ok();
        ok &= loader.load_exec("lock", "exec", &mut s.lock_exec).is_ok();
        ok &= loader.load_uint("dpms", "standby", &mut s.dpms_standby).is_ok();
        ok &= loader.load_exec("hooks", "on-lock", &mut s.hook_exec).is_ok();

        (s, ok)
    }
}

#[test]
fn full_pass_resolves_configured_and_keeps_defaults() {
    let store = TomlStore::parse(CONFIG).unwrap();
    let sink = RecordingSink::new();

    let (settings, ok) = Settings::load(&store, &sink);
    assert!(ok);

    assert!(settings.idle_enabled);
    assert_eq!(settings.idle_seconds, 300);
    assert_eq!(
        settings.idle_inputs,
        InputType::Keyboard.mask() | InputType::Mouse.mask(),
        "unrecognized 'spaceball' must be skipped"
    );
    assert!(!settings.lock_on_idle);
    assert_eq!(
        settings.lock_exec,
        vec!["xsecurelock", "--", "systemctl", "suspend"]
    );
    // Negative standby is treated as unconfigured.
    assert_eq!(settings.dpms_standby, 900);
    // [hooks] does not exist at all.
    assert!(settings.hook_exec.is_empty());

    // One debug entry for the absent hooks group, nothing warning-worthy.
    assert_eq!(sink.count(Severity::Warning), 0);
    assert_eq!(sink.count(Severity::Debug), 1);
    let entries = sink.entries();
    assert_eq!(entries[0].group, "hooks");
    assert_eq!(entries[0].key, "on-lock");
}

#[test]
fn malformed_values_fail_the_pass_but_keep_defaults() {
    let store = TomlStore::parse(
        "[idle]\nenabled = \"maybe\"\nseconds = \"soon\"\n[lock]\nexec = \"sh -c 'oops\"\n",
    )
    .unwrap();
    let sink = RecordingSink::new();

    let (settings, ok) = Settings::load(&store, &sink);
    assert!(!ok);
    assert_eq!(settings, Settings::default());
    assert_eq!(sink.count(Severity::Warning), 3);
}

/// A store whose lookups always blow up, standing in for an unreadable
/// backing file. Exercises the trait seam with a non-TOML implementation.
struct BrokenStore;

impl SettingsStore for BrokenStore {
    fn get_value(&self, _group: &str, _key: &str) -> Result<String, StoreError> {
        Err(StoreError::Invalid("backing file unreadable".into()))
    }

    fn get_value_list(&self, _group: &str, _key: &str) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Invalid("backing file unreadable".into()))
    }
}

#[test]
fn store_failures_warn_per_lookup() {
    let sink = RecordingSink::new();
    let (settings, ok) = Settings::load(&BrokenStore, &sink);

    assert!(!ok);
    assert_eq!(settings, Settings::default());
    assert_eq!(sink.count(Severity::Warning), 7);
    assert_eq!(sink.count(Severity::Debug), 0);
    assert!(
        sink.entries()
            .iter()
            .all(|e| e.message == "backing file unreadable")
    );
}
