//! Asset URL construction for the static export.
//!
//! When the site is exported for GitHub Pages it is served from a repository
//! sub-path instead of the domain root. The `GITHUB_PAGES` flag is read at
//! compile time and only changes generated asset URLs, never routing.

const GITHUB_PAGES_BASE: &str = "/northlight";

/// Base path prepended to asset URLs. Empty for root-hosted builds.
pub fn base_path() -> &'static str {
    match option_env!("GITHUB_PAGES") {
        Some("true") | Some("1") => GITHUB_PAGES_BASE,
        _ => "",
    }
}

/// Absolute URL for a site-relative asset path.
pub fn asset_url(path: &str) -> String {
    join(base_path(), path)
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_root_base() {
        assert_eq!(join("", "assets/work/a.webp"), "/assets/work/a.webp");
        assert_eq!(join("", "/assets/work/a.webp"), "/assets/work/a.webp");
    }

    #[test]
    fn test_join_sub_path_base() {
        assert_eq!(join("/northlight", "assets/a.webp"), "/northlight/assets/a.webp");
        assert_eq!(join("/northlight/", "/assets/a.webp"), "/northlight/assets/a.webp");
    }
}
