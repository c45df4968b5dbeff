use crate::{Project, RelatedLinks, ScmType};

use serde_json::json;

#[test]
fn test_project_deserializes_with_defaults() {
    let project: Project = serde_json::from_value(json!({
        "id": 1,
        "name": "Checkout Directory"
    }))
    .unwrap();

    assert_eq!(project.id, 1);
    assert_eq!(project.name, "Checkout Directory");
    assert_eq!(project.scm_type, ScmType::Manual);
    assert_eq!(project.organization, None);
    assert!(!project.scm_clean);
    assert!(!project.scm_delete_on_update);
    assert!(!project.scm_update_on_launch);
    assert_eq!(project.related, RelatedLinks::default());
}

#[test]
fn test_project_deserializes_full_record() {
    let project: Project = serde_json::from_value(json!({
        "id": 4,
        "name": "Site Playbooks",
        "description": "sample playbooks",
        "organization": 1,
        "scm_type": "git",
        "scm_url": "https://git.example.com/ops/site-playbooks.git",
        "scm_branch": "main",
        "scm_credential": 9,
        "scm_clean": true,
        "scm_delete_on_update": false,
        "scm_update_on_launch": true,
        "related": {
            "current_update": "/api/v1/project_updates/12/",
            "last_update": "/api/v1/project_updates/11/",
            "teams": "/api/v1/projects/4/teams/"
        }
    }))
    .unwrap();

    assert_eq!(project.scm_type, ScmType::Git);
    assert_eq!(project.scm_credential, Some(9));
    assert_eq!(
        project.related.current(),
        Some("/api/v1/project_updates/12/")
    );
    assert_eq!(project.related.last(), Some("/api/v1/project_updates/11/"));
}

#[test]
fn test_project_serializes_without_unset_options() {
    let project: Project = serde_json::from_value(json!({
        "id": 2,
        "name": "Bare"
    }))
    .unwrap();

    let value = serde_json::to_value(&project).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("scm_url"));
    assert_eq!(object["scm_type"], json!(""));
}

#[test]
fn test_related_links_treat_empty_string_as_absent() {
    let links = RelatedLinks {
        current_update: Some(String::new()),
        last_update: Some("/api/v1/project_updates/5/".to_string()),
    };

    assert_eq!(links.current(), None);
    assert_eq!(links.last(), Some("/api/v1/project_updates/5/"));
}

#[test]
fn test_related_links_absent_by_default() {
    let links = RelatedLinks::default();

    assert_eq!(links.current(), None);
    assert_eq!(links.last(), None);
}
