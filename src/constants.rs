pub const BUGZILLA_API_URL: &str = "https://bugzilla.mozilla.org/rest";
pub const CONFIG_FILE: &str = ".bzql-config.json";

pub const API_KEY_ENV: &str = "BUGZILLA_API_KEY";
pub const API_URL_ENV: &str = "BUGZILLA_URL";

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Tracker query parameter names
pub const INCLUDE_FIELDS_PARAM: &str = "include_fields";
pub const API_KEY_PARAM: &str = "api_key";
pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";

/// GraphQL output field → Bugzilla field name. Names not listed here are
/// sent to the tracker as written.
pub const FIELD_NAMES: &[(&str, &str)] = &[
    ("id", "id"),
    ("summary", "summary"),
    ("status", "status"),
    ("resolution", "resolution"),
    ("product", "product"),
    ("component", "component"),
    ("severity", "severity"),
    ("priority", "priority"),
    ("keywords", "keywords"),
    ("whiteboard", "whiteboard"),
    ("url", "url"),
    ("version", "version"),
    ("platform", "platform"),
    ("opSys", "op_sys"),
    ("targetMilestone", "target_milestone"),
    ("creationTime", "creation_time"),
    ("lastChangeTime", "last_change_time"),
    ("dependsOn", "depends_on"),
    ("blocks", "blocks"),
    ("cc", "cc"),
    ("assignee", "assigned_to"),
    ("creator", "creator"),
];

/// User-facing search key → Bugzilla search parameter.
pub const SEARCH_PARAMS: &[(&str, &str)] = &[
    ("apiKey", API_KEY_PARAM),
    ("assignee", "assigned_to"),
    ("reporter", "creator"),
    ("text", "quicksearch"),
    ("createdAfter", "creation_time"),
    ("changedAfter", "last_change_time"),
    ("ids", "id"),
    ("opSys", "op_sys"),
    ("targetMilestone", "target_milestone"),
];
