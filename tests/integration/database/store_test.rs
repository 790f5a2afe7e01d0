//! `PgUserStore` against a live database
//!
//! Run with `cargo test -- --ignored` and `DATABASE_URL` pointing at a
//! disposable database.

use assert_matches::assert_matches;
use groupnotes::backend::store::{NewUser, StoreError, UserStore};
use groupnotes::shared::{Note, UserId};
use pretty_assertions::assert_eq;

use crate::common::{group, unique_email, TestDatabase};

async fn new_user(db: &TestDatabase) -> UserId {
    db.store()
        .insert_user(NewUser {
            email: unique_email(),
            password_hash: "hash".to_string(),
        })
        .await
        .expect("insert user")
        .id
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find_credentials() {
    let db = TestDatabase::new().await;
    let email = unique_email();
    let user = db
        .store()
        .insert_user(NewUser {
            email: email.clone(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();
    assert!(user.groups.is_empty());

    let credentials = db.store().find_credentials(&email).await.unwrap().unwrap();
    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password_hash, "hash");

    let duplicate = db
        .store()
        .insert_user(NewUser {
            email,
            password_hash: "other".to_string(),
        })
        .await;
    assert_matches!(duplicate, Err(StoreError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_group_lifecycle() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let id = new_user(&db).await;

    store.push_group(&id, group(1, "One", &["a"])).await.unwrap().unwrap();
    let user = store.push_group(&id, group(2, "Two", &[])).await.unwrap().unwrap();
    assert_eq!(user.groups.len(), 2);

    let summaries = store.group_summaries(&id).await.unwrap().unwrap();
    assert_eq!(summaries.iter().map(|g| g.group_id).collect::<Vec<_>>(), vec![1, 2]);

    let groups = store.push_note(&id, 2, Note::from("b")).await.unwrap().unwrap();
    assert_eq!(groups[1].notes, vec![Note::from("b")]);
    assert_eq!(groups[0].notes, vec![Note::from("a")]);

    assert_eq!(store.push_note(&id, 9, Note::from("x")).await.unwrap(), None);

    assert_eq!(store.pull_group(&id, 1).await.unwrap(), 1);
    assert_eq!(store.pull_group(&id, 1).await.unwrap(), 0);

    let notes = store.group_notes(&id).await.unwrap().unwrap();
    assert_eq!(notes, vec![vec![Note::from("b")]]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_user() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let missing = UserId::generate();

    assert_eq!(store.find_user(&missing).await.unwrap(), None);
    assert_eq!(store.group_summaries(&missing).await.unwrap(), None);
    assert_eq!(store.group_notes(&missing).await.unwrap(), None);
    assert_eq!(store.push_group(&missing, group(1, "One", &[])).await.unwrap(), None);
    assert_eq!(store.push_note(&missing, 1, Note::from("n")).await.unwrap(), None);
    assert_eq!(store.pull_group(&missing, 1).await.unwrap(), 0);
}
