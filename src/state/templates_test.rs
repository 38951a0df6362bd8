use super::*;

#[test]
fn catalog_has_six_templates() {
    assert_eq!(CATALOG.len(), 6);
}

#[test]
fn catalog_keys_are_unique() {
    let mut keys: Vec<&str> = CATALOG.iter().map(|t| t.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), CATALOG.len());
}

#[test]
fn catalog_order_is_stable() {
    let keys: Vec<&str> = CATALOG.iter().map(|t| t.key).collect();
    assert_eq!(
        keys,
        ["web-e2e", "api", "unit", "mobile", "security", "performance"]
    );
}

#[test]
fn catalog_entries_have_display_text() {
    for template in &CATALOG {
        assert!(!template.title.is_empty(), "title for {}", template.key);
        assert!(
            !template.description.is_empty(),
            "description for {}",
            template.key
        );
    }
}
