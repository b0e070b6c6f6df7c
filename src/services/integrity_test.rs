use super::*;
use crate::state::users::Role;
use crate::util::storage::MemoryStorage;

fn users() -> RefCell<UserStore> {
    RefCell::new(UserStore::from_users(
        MemoryStorage::shared(),
        vec![
            User { id: "u1".to_owned(), email: "a@x.io".to_owned(), name: "A".to_owned(), role: Role::Customer },
            User { id: "admin".to_owned(), email: "root@x.io".to_owned(), name: "R".to_owned(), role: Role::Admin },
        ],
    ))
}

fn session_for(user_id: Option<&str>) -> RefCell<SessionStore> {
    let mut session = SessionStore::load(MemoryStorage::shared());
    if let Some(id) = user_id {
        session.sign_in(id);
    }
    RefCell::new(session)
}

#[test]
fn no_session_is_noop() {
    let session = session_for(None);
    assert_eq!(ensure_session_valid(&session, &users()), IntegrityOutcome::NoSession);
    assert_eq!(session.user_id(), None);
}

#[test]
fn existing_account_leaves_session_unchanged() {
    let session = session_for(Some("u1"));
    assert_eq!(ensure_session_valid(&session, &users()), IntegrityOutcome::Valid);
    assert_eq!(session.user_id().as_deref(), Some("u1"));
}

#[test]
fn dangling_reference_is_cleared() {
    let session = session_for(Some("deleted"));
    assert_eq!(ensure_session_valid(&session, &users()), IntegrityOutcome::Cleared);
    assert_eq!(session.user_id(), None);
}

#[test]
fn check_after_prune_clears_pruned_account() {
    let users = users();
    let session = session_for(Some("u1"));
    users.prune_customers_except_email("someone-else@x.io");
    assert_eq!(ensure_session_valid(&session, &users), IntegrityOutcome::Cleared);
    assert_eq!(session.user_id(), None);
}

#[test]
fn outcome_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&IntegrityOutcome::NoSession).unwrap(), "\"no_session\"");
}
