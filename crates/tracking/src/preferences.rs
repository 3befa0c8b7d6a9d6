use model::MapFocus;

const LAST_FOCUS_KEY: &str = "runmap-last_focus";
const HELP_NOTICE_KEY: &str = "runmap-help_notice";
const USE_METRIC_KEY: &str = "runmap-use_metric";
const FOLLOW_ROADS_KEY: &str = "runmap-follow_roads";
const MAP_STYLE_KEY: &str = "runmap-map_style";
const LAST_RUN_KEY: &str = "runmap-last_run";

pub const DEFAULT_MAP_STYLE: &str = "street-style";

/// Durable key/value storage scoped to the browser/session. An absent key
/// always means "use the default", never an error.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Typed user preferences over a raw preference store.
pub struct Preferences<S> {
    store: S,
}

impl<S> Preferences<S>
where
    S: PreferenceStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The map focus to restore, or the default viewport when none was
    /// stashed (or the stashed value no longer parses).
    pub fn last_or_default_focus(&self) -> MapFocus {
        self.store
            .get(LAST_FOCUS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save_focus(&self, focus: MapFocus) {
        match serde_json::to_string(&focus) {
            Ok(raw) => self.store.set(LAST_FOCUS_KEY, &raw),
            Err(e) => log::warn!("could not serialize map focus: {e}"),
        }
    }

    pub fn use_metric(&self) -> bool {
        self.load_bool(USE_METRIC_KEY)
    }

    pub fn save_use_metric(&self, value: bool) {
        self.save_bool(USE_METRIC_KEY, value);
    }

    pub fn follow_roads(&self) -> bool {
        self.load_bool(FOLLOW_ROADS_KEY)
    }

    pub fn save_follow_roads(&self, value: bool) {
        self.save_bool(FOLLOW_ROADS_KEY, value);
    }

    pub fn map_style(&self) -> String {
        self.load_string(MAP_STYLE_KEY, DEFAULT_MAP_STYLE)
    }

    pub fn save_map_style(&self, value: &str) {
        self.store.set(MAP_STYLE_KEY, value);
    }

    /// The serialized last-run snapshot; `"{}"` means no run was saved.
    pub fn last_run(&self) -> String {
        self.load_string(LAST_RUN_KEY, "{}")
    }

    pub fn save_last_run(&self, value: &str) {
        self.store.set(LAST_RUN_KEY, value);
    }

    pub fn help_acknowledged(&self) -> bool {
        self.load_bool(HELP_NOTICE_KEY)
    }

    pub fn save_help_acknowledged(&self, value: bool) {
        self.save_bool(HELP_NOTICE_KEY, value);
    }

    fn load_bool(&self, key: &str) -> bool {
        match self.store.get(key) {
            Some(value) => value == "true",
            None => true,
        }
    }

    fn save_bool(&self, key: &str, value: bool) {
        self.store.set(key, if value { "true" } else { "false" });
    }

    fn load_string(&self, key: &str, default: &str) -> String {
        self.store.get(key).unwrap_or_else(|| default.to_owned())
    }
}
