//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"u601_sql_assistant--usecase"`) and a `data-page-category` with one
//! of the constants below.

/// Use-case page: forms that drive an action on a remote service.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Intentionally custom design, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Build the page id for an entity and category.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
