use super::*;

#[test]
fn root_is_active_only_at_root() {
    assert!(is_active("/", "/"));
    assert!(is_active("/", ""));
    assert!(!is_active("/", "/budget"));
}

#[test]
fn nested_sections_do_not_activate_parent() {
    assert!(is_active("/legal/search", "/legal/search/"));
    assert!(!is_active("/legal", "/legal/search"));
    assert!(is_active("/ai", "/ai"));
}

#[test]
fn nav_links_cover_every_section() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    for path in ["/institutions", "/legal", "/legal/search", "/ai", "/ai/chat", "/reviews", "/budget"] {
        assert!(hrefs.contains(&path), "missing {path}");
    }
}

#[test]
fn reviews_link_hidden_only_for_anonymous_role() {
    let hrefs = |role| visible_links(role).into_iter().map(|(href, _)| href).collect::<Vec<_>>();
    assert!(hrefs(None).contains(&"/reviews"));
    assert!(hrefs(Some(UserRole::Citizen)).contains(&"/reviews"));
    assert!(hrefs(Some(UserRole::Moderator)).contains(&"/reviews"));

    let anonymous = hrefs(Some(UserRole::Anonymous));
    assert!(!anonymous.contains(&"/reviews"));
    assert_eq!(anonymous.len(), NAV_LINKS.len() - 1);
}
