use crate::{Project, ProjectFields, RelatedLinks, ScmType};

use serde_json::json;

fn sample_project() -> Project {
    Project {
        id: 4,
        name: "Site Playbooks".to_string(),
        description: Some("sample playbooks".to_string()),
        organization: Some(1),
        scm_type: ScmType::Git,
        scm_url: Some("https://git.example.com/ops/site-playbooks.git".to_string()),
        local_path: None,
        scm_branch: Some("main".to_string()),
        scm_credential: None,
        scm_clean: false,
        scm_delete_on_update: false,
        scm_update_on_launch: true,
        related: RelatedLinks::default(),
    }
}

#[test]
fn test_differs_from_detects_changed_field() {
    let fields = ProjectFields {
        scm_branch: Some("devel".to_string()),
        ..ProjectFields::default()
    };

    assert!(fields.differs_from(&sample_project()));
}

#[test]
fn test_differs_from_ignores_unset_fields() {
    assert!(!ProjectFields::default().differs_from(&sample_project()));
}

#[test]
fn test_differs_from_matching_values_is_false() {
    let fields = ProjectFields {
        name: Some("Site Playbooks".to_string()),
        scm_type: Some(ScmType::Git),
        scm_branch: Some("main".to_string()),
        scm_update_on_launch: Some(true),
        ..ProjectFields::default()
    };

    assert!(!fields.differs_from(&sample_project()));
}

#[test]
fn test_differs_from_detects_newly_set_optional() {
    let fields = ProjectFields {
        scm_credential: Some(9),
        ..ProjectFields::default()
    };

    assert!(fields.differs_from(&sample_project()));
}

#[test]
fn test_serializes_only_set_fields() {
    let fields = ProjectFields {
        name: Some("Renamed".to_string()),
        scm_clean: Some(true),
        ..ProjectFields::default()
    };

    let value = serde_json::to_value(&fields).unwrap();

    assert_eq!(value, json!({"name": "Renamed", "scm_clean": true}));
}
