use super::*;
use crate::util::storage::{MemoryStorage, Storage};

fn user(id: &str, email: &str, role: Role) -> User {
    User { id: id.to_owned(), email: email.to_owned(), name: id.to_owned(), role }
}

fn mixed_store() -> UserStore {
    UserStore::from_users(
        MemoryStorage::shared(),
        vec![
            user("admin", "admin@x.io", Role::Admin),
            user("c1", "keep@x.io", Role::Customer),
            user("staff", "keep@x.io", Role::Staff),
            user("c2", "other@x.io", Role::Customer),
            user("c3", "Keep@x.io", Role::Customer),
        ],
    )
}

// =============================================================
// prune_customers_except_email
// =============================================================

#[test]
fn prune_keeps_matching_customer_and_removes_the_rest() {
    let mut store = mixed_store();
    let report = store.prune_customers_except_email("keep@x.io");
    assert_eq!(report, PruneReport { removed: 2, kept_user_id: Some("c1".to_owned()) });
    let customers: Vec<&str> = store.users().iter().filter(|u| u.is_customer()).map(|u| u.email.as_str()).collect();
    assert_eq!(customers, vec!["keep@x.io"]);
}

#[test]
fn prune_match_is_case_sensitive() {
    let mut store = mixed_store();
    store.prune_customers_except_email("keep@x.io");
    assert!(store.get_by_id("c3").is_none());
}

#[test]
fn prune_never_touches_other_roles() {
    let mut store = mixed_store();
    let before: Vec<User> = store.users().iter().filter(|u| !u.is_customer()).cloned().collect();
    store.prune_customers_except_email("nobody@x.io");
    let after: Vec<User> = store.users().iter().filter(|u| !u.is_customer()).cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn prune_without_match_removes_every_customer() {
    let mut store = mixed_store();
    let customers = store.customer_count();
    let report = store.prune_customers_except_email("nobody@x.io");
    assert_eq!(report.kept_user_id, None);
    assert_eq!(report.removed, customers);
    assert_eq!(store.customer_count(), 0);
}

#[test]
fn prune_twice_with_same_email_removes_nothing_second_time() {
    let mut store = mixed_store();
    store.prune_customers_except_email("keep@x.io");
    let report = store.prune_customers_except_email("keep@x.io");
    assert_eq!(report.removed, 0);
    assert_eq!(report.kept_user_id.as_deref(), Some("c1"));
}

#[test]
fn prune_with_different_email_deletes_previously_kept_customer() {
    let mut store = mixed_store();
    store.prune_customers_except_email("keep@x.io");
    let report = store.prune_customers_except_email("other@x.io");
    assert_eq!(report, PruneReport { removed: 1, kept_user_id: None });
    assert!(store.get_by_id("c1").is_none());
}

#[test]
fn prune_persists_surviving_accounts() {
    let storage = MemoryStorage::shared();
    let mut store = UserStore::from_users(storage.clone(), mixed_store().users().to_vec());
    store.prune_customers_except_email("keep@x.io");
    let reloaded = UserStore::load(storage);
    assert_eq!(reloaded.users(), store.users());
}

// =============================================================
// load / register
// =============================================================

#[test]
fn load_installs_demo_accounts_on_empty_storage() {
    let storage = MemoryStorage::shared();
    let store = UserStore::load(storage.clone());
    assert_eq!(store.users(), demo_users().as_slice());
    assert!(storage.get(USERS_KEY).is_some());
}

#[test]
fn load_corrupt_document_is_empty() {
    let storage = MemoryStorage::shared();
    storage.set(USERS_KEY, "[{");
    let store = UserStore::load(storage);
    assert!(store.users().is_empty());
}

#[test]
fn register_trims_and_assigns_id() {
    let mut store = UserStore::from_users(MemoryStorage::shared(), Vec::new());
    let created = store.register("  new@x.io ", "", Role::Customer).unwrap();
    assert_eq!(created.email, "new@x.io");
    assert_eq!(created.name, "new");
    assert!(!created.id.is_empty());
    assert_eq!(store.get_by_id(&created.id), Some(&created));
}

#[test]
fn register_rejects_invalid_email() {
    let mut store = UserStore::from_users(MemoryStorage::shared(), Vec::new());
    assert!(matches!(store.register("   ", "x", Role::Customer), Err(UserStoreError::InvalidEmail(_))));
    assert!(matches!(store.register("no-at-sign", "x", Role::Customer), Err(UserStoreError::InvalidEmail(_))));
}

#[test]
fn register_rejects_duplicate_email() {
    let mut store = mixed_store();
    let err = store.register("other@x.io", "Dup", Role::Customer).unwrap_err();
    assert!(matches!(err, UserStoreError::DuplicateEmail(ref e) if e == "other@x.io"));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}
