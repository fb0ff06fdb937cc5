//! Mirrors the selected work category into the `?category=` query parameter
//! so a filtered gallery view can be linked to directly.

use crate::shared::categories::ALL_CATEGORY;
use std::collections::HashMap;
use web_sys::window;

const CATEGORY_PARAM: &str = "category";

/// Category named by the current URL, if any.
pub fn category_from_url() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_category(&search)
}

/// Rewrite the query string to reflect `selected` without adding a history
/// entry. Only the `category` key is touched; other parameters are kept.
/// `"all"` is the default and removes the key.
pub fn sync_category_to_url(selected: &str) {
    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let target = merge_category(&current, selected);
    if current == target {
        return;
    }
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let url = format!("{}{}", path, target);
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&url),
            );
        }
    }
}

fn parse_params(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

fn parse_category(search: &str) -> Option<String> {
    parse_params(search)
        .get(CATEGORY_PARAM)
        .map(|c| c.to_lowercase())
        .filter(|c| !c.is_empty())
}

/// New search string with the `category` key set (or removed for `"all"`)
/// and every other parameter carried over unchanged.
fn merge_category(search: &str, selected: &str) -> String {
    let mut params = parse_params(search);
    if selected == ALL_CATEGORY {
        params.remove(CATEGORY_PARAM);
    } else {
        params.insert(CATEGORY_PARAM.to_string(), selected.to_string());
    }
    if params.is_empty() {
        return String::new();
    }
    let query = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("?category=web"), Some("web".to_string()));
        assert_eq!(parse_category("category=web"), Some("web".to_string()));
        assert_eq!(parse_category("?category=Web"), Some("web".to_string()));
    }

    #[test]
    fn test_parse_category_absent_or_empty() {
        assert_eq!(parse_category(""), None);
        assert_eq!(parse_category("?"), None);
        assert_eq!(parse_category("?category="), None);
        assert_eq!(parse_category("?utm_source=x"), None);
    }

    #[test]
    fn test_parse_category_ignores_extra_params() {
        assert_eq!(
            parse_category("?utm_source=x&category=branding"),
            Some("branding".to_string())
        );
    }

    #[test]
    fn test_merge_category_plain() {
        assert_eq!(merge_category("", "all"), "");
        assert_eq!(merge_category("?category=web", "all"), "");
        assert_eq!(merge_category("", "web"), "?category=web");
        assert_eq!(merge_category("?category=web", "branding"), "?category=branding");
    }

    #[test]
    fn test_merge_category_keeps_unrelated_params() {
        // Selecting "all" must not clobber parameters this module does not own.
        assert_eq!(merge_category("?utm_source=x", "all"), "?utm_source=x");

        let merged = merge_category("?utm_source=x", "web");
        let params = parse_params(&merged);
        assert_eq!(params.get("utm_source").map(String::as_str), Some("x"));
        assert_eq!(params.get("category").map(String::as_str), Some("web"));

        let cleared = merge_category("?utm_source=x&category=web", "all");
        let params = parse_params(&cleared);
        assert_eq!(params.get("utm_source").map(String::as_str), Some("x"));
        assert_eq!(params.get("category"), None);
    }
}
