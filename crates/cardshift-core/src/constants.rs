/// Label sentinel delimiters understood by Apple's contact-card parser
pub const LABEL_SENTINEL_OPEN: &str = "_$!<";
pub const LABEL_SENTINEL_CLOSE: &str = ">!$_";

/// Android custom extension property and its cursor-item MIME prefix
pub const ANDROID_CUSTOM_PROPERTY: &str = "X-ANDROID-CUSTOM";
pub const ANDROID_CURSOR_ITEM_PREFIX: &str = "vnd.android.cursor.item/";

/// Apple grouped-item property names
pub const APPLE_LABEL_PROPERTY: &str = "X-ABLabel";
pub const APPLE_RELATED_NAMES_PROPERTY: &str = "X-ABRELATEDNAMES";
pub const APPLE_DATE_PROPERTY: &str = "X-ABDATE";

/// Document name the contacts are saved under when no output path is given
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "contacts.contacts";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "CARDSHIFT";
pub const ENV_SEPARATOR: &str = "__";
