//! End-to-end screen scenarios: a flow against an in-memory collection, then
//! the local list patch the screen applies for the outcome.

use api::{fetch_users, submit_create, submit_delete, submit_update, MemoryCollection};
use store::{Field, LocalList, NoticeLevel, RecordId, RuleSet, ScreenNotices, User, UserDraft};

fn ann() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ann",
        "email": "ann@x.com",
        "phone": "1234567890",
        "website": "a.com"
    }))
    .unwrap()
}

fn user(id: u64, name: &str) -> User {
    User {
        id: Some(id.into()),
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_delete_last_user_empties_list() {
    let client = MemoryCollection::seeded(vec![ann()]);
    let notices = ScreenNotices::remover();

    let mut list = LocalList::from_fetch(fetch_users(&client).await.unwrap());
    assert_eq!(list.len(), 1);

    let id = RecordId::Number(1);
    submit_delete(&client, &id).await.unwrap();
    assert!(list.remove_by_id(&id));
    let notice = notices.on_deleted();

    assert!(list.is_empty());
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "User deleted successfully!");
}

#[tokio::test]
async fn test_create_bob_appends_one_record() {
    let client = MemoryCollection::<User>::new();
    let mut list = LocalList::new();

    let mut draft = UserDraft::default();
    draft.set_name("Bob");
    draft.set(Field::Email, "bob@x.com".to_string());
    draft.set(Field::Phone, "5551234567".to_string());
    draft.set(Field::Street, "Main".to_string());
    draft.set(Field::City, "Town".to_string());

    let created = submit_create(&client, &draft, &RuleSet::creator())
        .await
        .unwrap();
    list.append_created(created, 1_700_000_000_000);

    assert_eq!(client.calls(), 1);
    assert_eq!(list.len(), 1);
    assert_eq!(list.records()[0].username, "USER-Bob");
    assert!(list.records()[0].company_name.is_empty());
}

#[tokio::test]
async fn test_echoed_create_ids_become_provisional() {
    // Mock backends answer every create with the same id.
    let client = MemoryCollection::seeded(vec![user(10, "Existing")]).echo_create_id(11u64);
    let mut list = LocalList::from_fetch(fetch_users(&client).await.unwrap());

    let mut draft = UserDraft::default();
    draft.set_name("Cat");
    let rules = RuleSet::quick_add();
    draft.set(Field::Email, "cat@x.com".to_string());
    draft.set(Field::Phone, "1".to_string());
    draft.set(Field::Website, "c.io".to_string());

    let first = submit_create(&client, &draft, &rules).await.unwrap();
    let second = submit_create(&client, &draft, &rules).await.unwrap();
    let first_id = list.append_created(first, 500);
    let second_id = list.append_created(second, 500);

    assert_eq!(first_id, RecordId::Number(11));
    assert_eq!(second_id, RecordId::Number(500));
    assert!(!list.records()[1].provisional);
    assert!(list.records()[2].provisional);
}

#[tokio::test]
async fn test_update_replaces_only_the_target() {
    let client = MemoryCollection::seeded(vec![user(1, "Ann"), user(2, "Bob"), user(3, "Cy")]);
    let mut list = LocalList::from_fetch(fetch_users(&client).await.unwrap());

    let mut working = list.get(&RecordId::Number(2)).cloned().unwrap();
    working.name = "Robert".to_string();
    let updated = submit_update(&client, &working).await.unwrap();
    assert!(list.replace_updated(updated.clone()));

    let names: Vec<_> = list.records().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Robert", "Cy"]);
    assert_eq!(
        list.records()
            .iter()
            .filter(|u| u.id == Some(RecordId::Number(2)))
            .count(),
        1
    );
    assert_eq!(list.get(&RecordId::Number(2)), Some(&updated));
}

#[tokio::test]
async fn test_delete_of_absent_id_is_local_noop() {
    let client = MemoryCollection::seeded(vec![user(1, "Ann")]);
    let mut list = LocalList::from_fetch(fetch_users(&client).await.unwrap());

    submit_delete(&client, &RecordId::Number(7)).await.unwrap();
    assert!(!list.remove_by_id(&RecordId::Number(7)));
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_failed_fetch_notice_carries_error() {
    let client = MemoryCollection::seeded(vec![ann()]);
    client.set_failing(Some(503));

    let err = fetch_users(&client).await.unwrap_err();
    let notice = ScreenNotices::lister().on_fetch_failed(&err.to_string());

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Error: Failed to fetch users (HTTP 503)");
}
