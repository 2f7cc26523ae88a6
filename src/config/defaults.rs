//! Default configuration values

/// Marker file that defines a Packwiz project root
pub const MARKER_FILE: &str = "pack.toml";

/// Suffix shared by every metadata file
pub const METADATA_SUFFIX: &str = ".pw.toml";

/// Index file maintained by `packwiz refresh`
pub const INDEX_FILE: &str = "index.toml";

/// Name of the Packwiz binary looked up on `PATH`
pub const MANAGER_BINARY: &str = "packwiz";

/// Argument that rebuilds the Packwiz index
pub const REFRESH_COMMAND: &str = "refresh";

/// Fallback for metadata files without a `side` field
pub const UNKNOWN_SIDE: &str = "unknown";

/// Default template for `pwkit list`
pub const DEFAULT_LIST_FORMAT: &str = "{name}";

/// Template used for labels in the removal checklist
pub const REMOVE_LABEL_FORMAT: &str = "{name} ({directory})";

/// Environment variable overriding the Packwiz executable
pub const ENV_EXEC: &str = "PACKWIZ_EXEC";

/// Environment variable overriding the project path
pub const ENV_PROJECT: &str = "PACKWIZ_PROJECT";

/// Environment variable overriding the `list` template
pub const ENV_LIST_FORMAT: &str = "PACKWIZ_LIST_FORMAT";
