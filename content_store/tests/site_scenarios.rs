//! End-to-end flows as the site's pages drive them.

use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Utc};
use content_model::{
    default_game_data, default_news, CharacterClass, GameDataPatch, NewsDraft, RegistrationForm,
    ServerStatus, User,
};
use content_store::{
    ContentStore, FileStorage, MemoryStorage, StoreConfig, StoreError, UserKey,
};
use uuid::Uuid;

fn scratch_file() -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("triglav-site-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("profile.json");
    (dir, file)
}

fn registration(email: &str, nickname: &str) -> RegistrationForm {
    let today = Utc::now().date_naive();
    RegistrationForm {
        email: email.to_string(),
        nickname: nickname.to_string(),
        password: "Perun2025!".to_string(),
        confirm_password: "Perun2025!".to_string(),
        birth_date: NaiveDate::from_ymd_opt(today.year() - 20, 1, 1),
        agree_to_terms: true,
    }
}

#[test]
fn test_news_scenario_on_empty_feed() {
    let mut store = ContentStore::open(MemoryStorage::new()).unwrap();
    store.delete_news(1).unwrap();
    assert!(store.news().is_empty());

    let a = store
        .add_news(NewsDraft::new("A", "1 марта").with_preview("first"))
        .unwrap();
    let b = store.add_news(NewsDraft::new("B", "2 марта")).unwrap();
    assert_eq!((a.id, b.id), (1, 2));

    let order: Vec<_> = store.news().iter().map(|n| n.title.clone()).collect();
    assert_eq!(order, vec!["B", "A"]);

    store.delete_news(1).unwrap();
    let news = store.news();
    assert_eq!(news.len(), 1);
    assert_eq!((news[0].id, news[0].title.as_str()), (2, "B"));
}

#[test]
fn test_registration_scenario() {
    let mut store = ContentStore::in_memory().unwrap();

    store.register(registration("a@x.com", "Bob")).unwrap();
    let err = store.register(registration("a@x.com", "Alice")).unwrap_err();

    assert!(matches!(
        err,
        StoreError::DuplicateUser {
            field: UserKey::Email,
            ..
        }
    ));
    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_profile_flow() {
    let mut store = ContentStore::in_memory().unwrap();
    store.register(registration("mikula@x.com", "Mikula")).unwrap();

    let session = store.sign_in("Mikula", "Perun2025!").unwrap();
    assert!(session.characters.is_empty());

    store
        .create_character(&session.email, "Volga", CharacterClass::Mage)
        .unwrap();
    store
        .create_character(&session.email, "Sukhman", CharacterClass::Cavalry)
        .unwrap();

    let stored = store.find_user("mikula@x.com").unwrap();
    let names: Vec<_> = stored.characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Volga", "Sukhman"]);
    assert!(stored.characters.iter().all(|c| c.level == 1));

    assert_eq!(store.current_user().unwrap().characters, stored.characters);
}

#[test]
fn test_admin_editing_flow() {
    let mut store = ContentStore::in_memory().unwrap();
    store.sign_in("admin", "admin").unwrap();
    assert!(store.is_admin());

    let mut data = store.game_data();
    data.add_screenshot("data:image/png;base64,iVBORw0KGgo=");
    data.remove_screenshot(0);
    store.update_game_data(&data).unwrap();
    store.set_server_status(ServerStatus::Online).unwrap();

    let data = store.game_data();
    assert_eq!(data.screenshots.len(), 4);
    assert_eq!(data.server_status, ServerStatus::Online);

    store
        .apply_game_data_patch(GameDataPatch {
            tagline: Some("MMORPG".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.game_data().tagline, "MMORPG");

    store.reset_to_defaults().unwrap();
    assert_eq!(store.game_data(), default_game_data());
    assert!(store.is_admin());
}

#[test]
fn test_file_profile_survives_reopen() {
    let (dir, file) = scratch_file();

    {
        let mut store = ContentStore::open(FileStorage::open(&file).unwrap()).unwrap();
        store
            .add_user(User::new("a@x.com", "Bob", "password123", Utc::now()))
            .unwrap();
        store.add_news(NewsDraft::new("Persisted", "today")).unwrap();
        store.sign_in("Bob", "password123").unwrap();
    }

    let store = ContentStore::open(FileStorage::open(&file).unwrap()).unwrap();
    assert_eq!(store.users().len(), 1);
    assert_eq!(store.news()[0].title, "Persisted");
    assert_eq!(store.news().len(), default_news().len() + 1);
    assert_eq!(store.current_user().unwrap().nickname, "Bob");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_store_from_config() {
    let (dir, file) = scratch_file();
    let config = StoreConfig::from_toml_str(&format!(
        "key_prefix = \"triglav_\"\ndata_file = {:?}\n",
        file.display().to_string()
    ))
    .unwrap();

    let mut store = ContentStore::from_config(&config).unwrap();
    store.add_news(NewsDraft::new("Configured", "")).unwrap();
    drop(store);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert!(raw.get("triglav_content-news").is_some());
    assert!(raw.get("content-news").is_none());

    let store = ContentStore::from_config(&config).unwrap();
    assert_eq!(store.news()[0].title, "Configured");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_in_memory_config() {
    let store = ContentStore::from_config(&StoreConfig::default()).unwrap();
    assert_eq!(store.game_data(), default_game_data());
    assert!(store.users().is_empty());
}
