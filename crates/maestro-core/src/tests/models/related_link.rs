use crate::RelatedLink;

#[test]
fn test_related_link_parse() {
    let link = RelatedLink::parse("/api/v1/project_updates/42/").unwrap();

    assert_eq!(link.kind, "project_updates");
    assert_eq!(link.id, 42);
}

#[test]
fn test_related_link_parse_without_trailing_slash() {
    let link = RelatedLink::parse("/api/v1/projects/7").unwrap();

    assert_eq!(link.kind, "projects");
    assert_eq!(link.id, 7);
}

#[test]
fn test_related_link_parse_ignores_leading_segments() {
    let link = RelatedLink::parse("/api/v2/nested/deeper/project_updates/3/").unwrap();

    assert_eq!(link.kind, "project_updates");
    assert_eq!(link.id, 3);
}

#[test]
fn test_related_link_parse_rejects_non_numeric_id() {
    assert!(RelatedLink::parse("/api/v1/project_updates/latest/").is_err());
}

#[test]
fn test_related_link_parse_rejects_short_paths() {
    assert!(RelatedLink::parse("").is_err());
    assert!(RelatedLink::parse("/").is_err());
    assert!(RelatedLink::parse("/42/").is_err());
}
