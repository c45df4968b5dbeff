use crate::ScmType;

use std::str::FromStr;

#[test]
fn test_scm_type_as_str() {
    assert_eq!(ScmType::Manual.as_str(), "manual");
    assert_eq!(ScmType::Git.as_str(), "git");
    assert_eq!(ScmType::Hg.as_str(), "hg");
    assert_eq!(ScmType::Svn.as_str(), "svn");
}

#[test]
fn test_scm_type_from_str() {
    assert_eq!(ScmType::from_str("manual").unwrap(), ScmType::Manual);
    assert_eq!(ScmType::from_str("").unwrap(), ScmType::Manual);
    assert_eq!(ScmType::from_str("git").unwrap(), ScmType::Git);
    assert_eq!(ScmType::from_str("hg").unwrap(), ScmType::Hg);
    assert_eq!(ScmType::from_str("svn").unwrap(), ScmType::Svn);
    assert!(ScmType::from_str("cvs").is_err());
}

#[test]
fn test_scm_type_default() {
    assert_eq!(ScmType::default(), ScmType::Manual);
}

#[test]
fn test_scm_type_wire_format() {
    // Manual travels as the empty string, never as "manual"
    assert_eq!(serde_json::to_string(&ScmType::Manual).unwrap(), "\"\"");
    assert_eq!(serde_json::to_string(&ScmType::Git).unwrap(), "\"git\"");

    assert_eq!(
        serde_json::from_str::<ScmType>("\"\"").unwrap(),
        ScmType::Manual
    );
    assert_eq!(
        serde_json::from_str::<ScmType>("\"svn\"").unwrap(),
        ScmType::Svn
    );
}
