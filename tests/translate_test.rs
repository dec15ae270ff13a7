//! Phrase lookup tests
//!
//! Covers the cached lookup path: fallback to the source phrase, key
//! derivation, auto-create persistence and cache behaviour.

mod helpers;

use helpers::*;

#[tokio::test]
async fn test_unknown_phrase_falls_back_without_auto_create() {
    let ctx = TestContext::new(false);
    ctx.write_language("de_DE", &[("Garage", "Werkstatt")]);
    let store = ctx.store();

    assert_eq!(store.translate("de_DE", "Fuel Economy").await, "Fuel Economy");
    assert_eq!(ctx.read_language("de_DE"), dictionary(&[("Garage", "Werkstatt")]));
}

#[tokio::test]
async fn test_lookup_uses_underscored_key() {
    let ctx = TestContext::new(false);
    ctx.write_language("de_DE", &[("Add_Vehicle", "Fahrzeug hinzufügen")]);
    let store = ctx.store();

    assert_eq!(store.translate("de_DE", "Add Vehicle").await, "Fahrzeug hinzufügen");
    // The key itself also matches
    assert_eq!(store.translate("de_DE", "Add_Vehicle").await, "Fahrzeug hinzufügen");
}

#[tokio::test]
async fn test_baseline_language_reads_defaults_file() {
    let ctx = TestContext::new(false);
    let store = ctx.store();

    assert_eq!(store.translate("en_US", "Service Records").await, "Service Records");
    assert_eq!(store.translate("en_US", "Unknown Phrase").await, "Unknown Phrase");
}

#[tokio::test]
async fn test_repeated_lookup_without_auto_create_is_read_only() {
    let ctx = TestContext::new(false);
    ctx.write_language("fr_FR", &[("Garage", "Garage")]);
    let before = ctx.read_raw("translations/fr_FR.json");
    let store = ctx.store();

    store.translate("fr_FR", "Odometer Reading").await;
    store.translate("fr_FR", "Odometer Reading").await;

    assert_eq!(ctx.read_raw("translations/fr_FR.json"), before);
    assert_eq!(store.get_translations("fr_FR").await.len(), BASELINE.len());
}

#[tokio::test]
async fn test_auto_create_appends_unknown_phrase() {
    let ctx = TestContext::new(true);
    ctx.write_language("de_DE", &[("Garage", "Werkstatt")]);
    let store = ctx.store();

    assert_eq!(store.translate("de_DE", "Fuel Economy").await, "Fuel Economy");

    let on_disk = ctx.read_language("de_DE");
    assert_eq!(
        on_disk,
        dictionary(&[("Garage", "Werkstatt"), ("Fuel_Economy", "Fuel Economy")])
    );
    // Whole dictionary is rewritten in compact form
    assert!(!ctx.read_raw("translations/de_DE.json").contains('\n'));

    // Second lookup is served from the updated cache without another write
    assert_eq!(store.translate("de_DE", "Fuel Economy").await, "Fuel Economy");
    assert_eq!(store.translate("de_DE", "Garage").await, "Werkstatt");
}

#[tokio::test]
async fn test_auto_create_extends_baseline_dictionary() {
    let ctx = TestContext::new(true);
    let store = ctx.store();

    store.translate("en_US", "Reminders").await;

    let defaults = ctx.read_dictionary("defaults/en_US.json");
    assert_eq!(defaults.get("Reminders").map(String::as_str), Some("Reminders"));
    assert_eq!(defaults.len(), BASELINE.len() + 1);
}

#[tokio::test]
async fn test_auto_create_never_creates_missing_file() {
    let ctx = TestContext::new(true);
    let store = ctx.store();

    assert_eq!(store.translate("nl_NL", "Garage").await, "Garage");
    assert!(!ctx.path("translations/nl_NL.json").exists());
}

#[tokio::test]
async fn test_auto_create_logs_added_key() {
    let ctx = TestContext::new(true);
    ctx.write_language("es_ES", &[]);
    let store = ctx.store();
    let (logs, _guard) = capture_logs();

    store.translate("es_ES", "Tax Records").await;

    assert!(logs.contains("Translation key added"));
    assert!(logs.contains("Tax_Records"));
}

#[tokio::test]
async fn test_lookups_are_cached() {
    let ctx = TestContext::new(false);
    ctx.write_language("de_DE", &[("Garage", "Werkstatt")]);
    let store = ctx.store();

    assert_eq!(store.translate("de_DE", "Garage").await, "Werkstatt");

    // Out-of-band edits are not seen until the entry is invalidated
    ctx.write_language("de_DE", &[("Garage", "Garage (neu)")]);
    assert_eq!(store.translate("de_DE", "Garage").await, "Werkstatt");

    // The bulk read path always goes to disk
    assert_eq!(
        store.get_translations("de_DE").await.get("Garage").map(String::as_str),
        Some("Garage (neu)")
    );
}

#[tokio::test]
async fn test_missing_file_is_logged_and_falls_back() {
    let ctx = TestContext::new(false);
    let store = ctx.store();
    let (logs, _guard) = capture_logs();

    assert_eq!(store.translate("pt_BR", "Garage").await, "Garage");

    assert!(logs.contains("Could not load translation file"));
    assert!(logs.contains("file not found"));
    assert!(logs.contains("pt_BR"));
}

#[tokio::test]
async fn test_malformed_file_is_logged_and_falls_back() {
    let ctx = TestContext::new(false);
    ctx.write_raw("translations/it_IT.json", "{\"Garage\": ");
    let store = ctx.store();
    let (logs, _guard) = capture_logs();

    assert_eq!(store.translate("it_IT", "Garage").await, "Garage");

    assert!(logs.contains("malformed JSON"));
}

#[tokio::test]
async fn test_failed_load_is_cached_as_empty() {
    let ctx = TestContext::new(false);
    let store = ctx.store();

    assert_eq!(store.translate("sv_SE", "Garage").await, "Garage");

    // File appears later, but the empty entry stays cached
    ctx.write_language("sv_SE", &[("Garage", "Verkstad")]);
    assert_eq!(store.translate("sv_SE", "Garage").await, "Garage");
}

#[tokio::test(start_paused = true)]
async fn test_expired_entries_do_not_accumulate() {
    let ctx = TestContext::new(false);
    let cache = std::sync::Arc::new(phrasebook::MemoryCache::new());
    let store = ctx.store_with_cache(cache.clone());

    for i in 0..500 {
        store.translate(&format!("xx_{}", i), "Garage").await;
    }
    assert_eq!(cache.len(), 500);

    tokio::time::advance(std::time::Duration::from_secs(3 * 3600)).await;
    store.translate("de_DE", "Garage").await;

    assert_eq!(cache.len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn test_auto_create_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new(true);
    ctx.write_language("de_DE", &[("Garage", "Werkstatt")]);
    let path = ctx.path("translations/de_DE.json");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    let store = ctx.store();

    assert_eq!(store.translate("de_DE", "Fuel Economy").await, "Fuel Economy");

    assert!(ctx.read_language("de_DE").contains_key("Fuel_Economy"));
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
