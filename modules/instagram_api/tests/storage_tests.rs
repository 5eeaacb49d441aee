//! Settings store against a real SQLite database

mod common;

use common::{init_tracing, memory_db, print_test_header};
use instagram_api::contract::SettingsApi;
use instagram_api::domain::repository::SettingsRepository;
use instagram_api::domain::Service;
use instagram_api::infra::storage::SeaOrmSettingsRepository;
use instagram_api::{Config, SettingsStoreModule};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::Arc;

async fn has_table(db: &DatabaseConnection, table: &str) -> bool {
    let manager = sea_orm_migration::SchemaManager::new(db);
    manager.has_table(table).await.expect("has_table failed")
}

#[tokio::test]
async fn test_provisioning_is_idempotent() {
    init_tracing();
    print_test_header(
        "test_provisioning_is_idempotent",
        &["Opening the store twice creates the tables once and does not fail."],
    );

    let db = Arc::new(memory_db().await);
    let repo = SeaOrmSettingsRepository::new(db.clone(), "user_settings");

    assert!(repo.provision().await.expect("first provision"));
    assert!(!repo.provision().await.expect("second provision"));
    assert!(has_table(&db, "user_settings").await);
    assert!(has_table(&db, "user_settings_extra").await);
}

#[tokio::test]
async fn test_values_survive_a_fresh_load() {
    init_tracing();
    print_test_header(
        "test_values_survive_a_fresh_load",
        &["set(token) followed by a fresh load for the same username returns the token."],
    );

    let db = Arc::new(memory_db().await);

    println!("\n📝 Stage 1: Write through the first store");
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let first = Service::open(repo, "alice").await.expect("open failed");
    first.set("token", "T").await.expect("set token");
    first.set("username_id", "1234").await.expect("set username_id");
    first
        .set("devicestring", "23/6.0.1; 640dpi; 1440x2392; LGE/lge; RS988; h1; h1")
        .await
        .expect("set devicestring");
    let id = first.record().id.expect("id assigned");

    println!("\n📝 Stage 2: Reload with a new store");
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let second = Service::open(repo, "alice").await.expect("reopen failed");

    assert_eq!(second.record().id, Some(id));
    assert_eq!(second.get("token").as_deref(), Some("T"));
    assert_eq!(second.get("username_id").as_deref(), Some("1234"));
    assert_eq!(second.get("last_login").as_deref(), Some("0"));
    assert!(second.get("date").is_some(), "creation timestamp defaults to now");
    assert!(second.maybe_logged_in());
}

#[tokio::test]
async fn test_updates_keep_a_single_row() {
    let db = Arc::new(memory_db().await);
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let service = Service::open(repo, "bob").await.expect("open failed");

    service.set("token", "one").await.expect("set");
    service.set("token", "two").await.expect("set");
    service.set("cookies", "{\"sessionid\":\"abc\"}").await.expect("set");

    let backend = db.get_database_backend();
    let row = db
        .query_one(sea_orm::Statement::from_string(
            backend,
            "SELECT COUNT(*) AS n FROM user_settings",
        ))
        .await
        .expect("count query")
        .expect("count row");
    let count: i64 = row.try_get("", "n").expect("count column");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_extra_keys_are_persisted_in_the_side_table() {
    let db = Arc::new(memory_db().await);

    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let service = Service::open(repo, "carol").await.expect("open failed");
    service.set("proxy", "socks5://127.0.0.1:1080").await.expect("set proxy");
    service.set("experiments", "{}").await.expect("set experiments");
    service.set("proxy", "http://127.0.0.1:8080").await.expect("overwrite proxy");

    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let reloaded = Service::open(repo, "carol").await.expect("reopen failed");
    assert_eq!(reloaded.get("proxy").as_deref(), Some("http://127.0.0.1:8080"));
    assert_eq!(reloaded.get("experiments").as_deref(), Some("{}"));
    assert_eq!(reloaded.record().extra.len(), 2);
}

#[tokio::test]
async fn test_accounts_are_isolated() {
    let db = Arc::new(memory_db().await);

    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let alice = Service::open(repo.clone(), "alice").await.expect("open alice");
    let bob = Service::open(repo.clone(), "bob").await.expect("open bob");

    alice.set("token", "A").await.expect("set");
    bob.set("token", "B").await.expect("set");
    bob.set("proxy", "bob-proxy").await.expect("set");

    assert_ne!(alice.record().id, bob.record().id);

    let alice = Service::open(repo, "alice").await.expect("reopen alice");
    assert_eq!(alice.get("token").as_deref(), Some("A"));
    assert_eq!(alice.get("proxy"), None);
}

#[tokio::test]
async fn test_module_opens_a_custom_table() {
    init_tracing();
    let module = SettingsStoreModule::new(Config {
        db_tablename: "ig_accounts".to_string(),
        db_url: Some("sqlite::memory:".to_string()),
        ..Config::default()
    });

    let db = module.connect().await.expect("connect failed");
    let store: Arc<dyn SettingsApi> = module
        .open_with_connection(db, "dora")
        .await
        .expect("open failed");

    store.set("uuid", "0d6f5c5e-0000-4000-8000-000000000000").await.expect("set");
    assert_eq!(store.username(), "dora");
    assert_eq!(
        store.get("uuid").as_deref(),
        Some("0d6f5c5e-0000-4000-8000-000000000000")
    );
    assert_eq!(store.get_or("phone_id", "unset"), "unset");
}

#[tokio::test]
async fn test_unreachable_database_is_a_connection_error() {
    let module = SettingsStoreModule::new(Config {
        db_url: Some("sqlite:///nonexistent-dir/settings.db?mode=ro".to_string()),
        ..Config::default()
    });

    let err = module.open("erin").await.err().expect("open must fail");
    assert!(matches!(
        err,
        instagram_api::SettingsError::Connection { .. }
    ));
}

#[tokio::test]
async fn test_settings_survive_reconnecting() {
    init_tracing();
    print_test_header(
        "test_settings_survive_reconnecting",
        &["A second connection to the same database file sees the saved row."],
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.db");
    let module = SettingsStoreModule::new(Config {
        db_url: Some(format!("sqlite://{}?mode=rwc", path.display())),
        ..Config::default()
    });

    {
        let store = module.open("frank").await.expect("open failed");
        store.set("phone_id", "p-1").await.expect("set phone_id");
        store.set("last_login", "1760000000").await.expect("set last_login");
    }

    let store = module.open("frank").await.expect("reopen failed");
    assert_eq!(store.get("phone_id").as_deref(), Some("p-1"));
    assert_eq!(store.get("last_login").as_deref(), Some("1760000000"));
    assert_eq!(store.all().get("username").map(String::as_str), Some("frank"));
}

#[tokio::test]
async fn test_overlapping_writes_on_a_new_user_are_all_stored() {
    init_tracing();
    print_test_header(
        "test_overlapping_writes_on_a_new_user_are_all_stored",
        &["Concurrent first writes must not both INSERT the same username."],
    );

    let db = Arc::new(memory_db().await);
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let service = Service::open(repo, "hana").await.expect("open failed");

    let (token, phone) = tokio::join!(service.set("token", "T"), service.set("phone_id", "P"));
    token.expect("set token");
    phone.expect("set phone_id");

    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone(), "user_settings"));
    let reloaded = Service::open(repo, "hana").await.expect("reopen failed");
    assert_eq!(reloaded.get("token").as_deref(), Some("T"));
    assert_eq!(reloaded.get("phone_id").as_deref(), Some("P"));
    assert_eq!(reloaded.record().id, service.record().id);
}
