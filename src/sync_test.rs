use super::*;
use crate::memory::{ElementId, MemoryDocument};

// =============================================================
// Helpers
// =============================================================

fn has(doc: &MemoryDocument, id: ElementId, class: &str) -> bool {
    doc.element(id).is_some_and(|el| el.has_class(class))
}

fn is_filled(doc: &MemoryDocument, id: ElementId) -> bool {
    has(doc, id, "ph-fill") && !has(doc, id, "ph")
}

fn is_outline(doc: &MemoryDocument, id: ElementId) -> bool {
    has(doc, id, "ph") && !has(doc, id, "ph-fill")
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn dark_icon_fills_when_dark() {
    let mut doc = MemoryDocument::new();
    let id = doc.insert(&["ph-fill-if-dark", "ph", "ph-user"]);

    synchronize(&mut doc, &FillConfig::default(), true);

    assert!(is_filled(&doc, id));
    assert!(has(&doc, id, "ph-user"));
}

#[test]
fn light_icon_outlines_when_dark() {
    let mut doc = MemoryDocument::new();
    let id = doc.insert(&["ph-fill-if-light", "ph-fill"]);

    synchronize(&mut doc, &FillConfig::default(), true);

    assert!(is_outline(&doc, id));
}

#[test]
fn empty_document_is_a_noop() {
    let mut doc = MemoryDocument::new();
    synchronize(&mut doc, &FillConfig::default(), true);
    synchronize(&mut doc, &FillConfig::default(), false);
    assert!(doc.is_empty());
}

#[test]
fn swapped_in_icons_without_glyph_get_exactly_one() {
    let config = FillConfig::default();
    let mut doc = MemoryDocument::new();
    let old = doc.insert(&["ph-fill-if-dark", "ph"]);
    synchronize(&mut doc, &config, false);

    // Swap replaces the old region with fresh, unstyled icons.
    doc.remove(old);
    let fresh: Vec<_> = (0..3).map(|_| doc.insert(&["ph-fill-if-dark"])).collect();
    synchronize(&mut doc, &config, true);

    for id in fresh {
        assert_ne!(has(&doc, id, "ph"), has(&doc, id, "ph-fill"));
        assert!(is_filled(&doc, id));
    }
}

// =============================================================
// Properties
// =============================================================

#[test]
fn dark_icons_follow_the_flag_both_ways() {
    let config = FillConfig::default();
    let mut doc = MemoryDocument::new();
    let id = doc.insert(&["ph-fill-if-dark", "ph"]);

    synchronize(&mut doc, &config, true);
    assert!(is_filled(&doc, id));
    synchronize(&mut doc, &config, false);
    assert!(is_outline(&doc, id));
}

#[test]
fn light_icons_mirror_dark_icons() {
    let config = FillConfig::default();
    for is_dark in [true, false] {
        let mut doc = MemoryDocument::new();
        let dark = doc.insert(&["ph-fill-if-dark"]);
        let light = doc.insert(&["ph-fill-if-light"]);

        synchronize(&mut doc, &config, is_dark);

        assert_eq!(is_filled(&doc, dark), is_outline(&doc, light));
        assert_eq!(is_outline(&doc, dark), is_filled(&doc, light));
    }
}

#[test]
fn second_pass_changes_nothing() {
    let config = FillConfig::default();
    for is_dark in [true, false] {
        let mut doc = MemoryDocument::new();
        doc.insert(&["ph-fill-if-dark", "ph", "ph-fill"]);
        doc.insert(&["ph-fill-if-light"]);
        doc.insert(&["ph"]);

        synchronize(&mut doc, &config, is_dark);
        let once = doc.clone();
        synchronize(&mut doc, &config, is_dark);

        assert_eq!(doc, once);
    }
}

#[test]
fn unmarked_elements_are_untouched() {
    let config = FillConfig::default();
    let mut doc = MemoryDocument::new();
    let plain = doc.insert(&["ph", "ph-fill", "ph-house"]);
    let before = doc.element(plain).cloned();

    synchronize(&mut doc, &config, true);
    synchronize(&mut doc, &config, false);

    assert_eq!(doc.element(plain).cloned(), before);
}

#[test]
fn both_glyph_classes_collapse_to_one() {
    let mut doc = MemoryDocument::new();
    let id = doc.insert(&["ph-fill-if-light", "ph", "ph-fill"]);

    synchronize(&mut doc, &FillConfig::default(), false);

    assert!(is_filled(&doc, id));
}

#[test]
fn icon_with_both_memberships_follows_light_rule() {
    let mut doc = MemoryDocument::new();
    let id = doc.insert(&["ph-fill-if-dark", "ph-fill-if-light"]);

    synchronize(&mut doc, &FillConfig::default(), true);

    assert!(is_outline(&doc, id));
}

#[test]
fn custom_class_names_are_honored() {
    let config = FillConfig::from_json(
        r#"{"fill_if_dark":"dark-fill","outline":"bi","filled":"bi-fill"}"#,
    )
    .unwrap();
    let mut doc = MemoryDocument::new();
    let custom = doc.insert(&["dark-fill", "bi"]);
    let phosphor = doc.insert(&["ph-fill-if-dark", "ph"]);

    synchronize(&mut doc, &config, true);

    assert!(has(&doc, custom, "bi-fill"));
    assert!(!has(&doc, custom, "bi"));
    assert_eq!(doc.element(phosphor).unwrap().classes(), ["ph-fill-if-dark", "ph"]);
}
