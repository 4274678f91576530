//! Application-level configuration constants.

// Element ids rendered by the market create/edit templates
pub const ENDLESS_CHECKBOX_ID: &str = "id_endless";
pub const MAX_ROUNDS_INPUT_ID: &str = "id_max_rounds";
pub const MAX_ROUNDS_CONTAINER_ID: &str = "div_id_max_rounds";
pub const MARKET_FORM_NAME: &str = "market_form";

// Any positive integer below the upper limit passes server validation.
// The exact value is ignored for endless markets.
pub const ENDLESS_MAX_ROUNDS_SENTINEL: u32 = 15;

// Where the server hands the upper limit to the page
pub const UPPER_LIMIT_DATA_ATTRIBUTE: &str = "data-upper-limit-on-max-rounds";
pub const UPPER_LIMIT_BOOTSTRAP_KEY: &str = "upper_limit_on_max_rounds";

// CSS visibility values
pub const VISIBILITY_HIDDEN: &str = "hidden";
pub const VISIBILITY_CLEARED: &str = "";

// DOM event that re-runs the visibility toggle
pub const ENDLESS_CHANGE_EVENT: &str = "change";
