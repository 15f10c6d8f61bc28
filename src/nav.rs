/// Last segment of a location path, `index.html` for the site root.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => "index.html",
    }
}

/// Current page from the router's path, falling back to the browser location
/// when no router is mounted.
pub fn resolve_page(router_path: Option<String>, fallback: impl FnOnce() -> String) -> String {
    let path = router_path.unwrap_or_else(fallback);
    current_page(&path).to_string()
}

pub fn is_active(href: &str, current_page: &str) -> bool {
    href == current_page
}

/// Target id of an in-page anchor (`#section`), if the href is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_takes_last_segment() {
        assert_eq!(current_page("/a/b/about.html"), "about.html");
        assert_eq!(current_page("contact.html"), "contact.html");
    }

    #[test]
    fn root_and_trailing_slash_mean_index() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/works/"), "index.html");
    }

    #[test]
    fn router_path_wins_over_browser_location() {
        assert_eq!(resolve_page(Some("/works.html".into()), || "/about.html".into()), "works.html");
        assert_eq!(resolve_page(None, || "/about.html".into()), "about.html");
        assert_eq!(resolve_page(Some("/".into()), || unreachable!()), "index.html");
    }

    #[test]
    fn active_link_matches_exactly() {
        let page = current_page("/about.html");
        assert!(is_active("about.html", page));
        assert!(!is_active("index.html", page));
        assert!(is_active("index.html", current_page("/")));
    }

    #[test]
    fn anchors_need_an_id() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("about.html"), None);
    }
}
