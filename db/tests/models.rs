use db::models::{role, tenant, user, user_role};
use db::test_utils::{insert_roles, insert_tenants, setup_test_db};

#[tokio::test]
async fn reference_sets_load_in_id_order() {
    let db = setup_test_db().await.unwrap();
    insert_tenants(&db, 3).await.unwrap();
    insert_roles(&db, 2).await.unwrap();

    let tenants = tenant::Model::all_ordered(&db).await.unwrap();
    let codes: Vec<&str> = tenants.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["T1", "T2", "T3"]);

    let roles = role::Model::all_ordered(&db).await.unwrap();
    assert_eq!(roles.len(), 2);
    assert!(roles[0].id < roles[1].id);
}

#[tokio::test]
async fn user_create_sets_defaults_and_returns_id() {
    let db = setup_test_db().await.unwrap();
    let tenants = insert_tenants(&db, 1).await.unwrap();

    let created = user::Model::create(&db, "user1", "$2b$04$hash", tenants[0].id)
        .await
        .unwrap();

    assert!(created.id > 0);
    assert!(created.is_active);
    assert_eq!(created.tenant_id, tenants[0].id);
    assert!(created.updated_at.is_none());
    assert!(created.email.is_none());

    let found = user::Model::find_by_username(&db, "user1").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$2b$04$hash");
}

#[tokio::test]
async fn username_exists_reflects_inserted_rows() {
    let db = setup_test_db().await.unwrap();
    let tenants = insert_tenants(&db, 1).await.unwrap();

    assert!(!user::Model::username_exists(&db, "user7").await.unwrap());
    user::Model::create(&db, "user7", "h", tenants[0].id).await.unwrap();
    assert!(user::Model::username_exists(&db, "user7").await.unwrap());
    assert!(!user::Model::username_exists(&db, "user70").await.unwrap());
}

#[tokio::test]
async fn duplicate_username_is_rejected_by_schema() {
    let db = setup_test_db().await.unwrap();
    let tenants = insert_tenants(&db, 1).await.unwrap();

    user::Model::create(&db, "user1", "h", tenants[0].id).await.unwrap();
    let second = user::Model::create(&db, "user1", "h", tenants[0].id).await;
    assert!(second.is_err());
}

#[tokio::test]
async fn role_assignment_links_user_and_role() {
    let db = setup_test_db().await.unwrap();
    let tenants = insert_tenants(&db, 1).await.unwrap();
    let roles = insert_roles(&db, 2).await.unwrap();
    let u = user::Model::create(&db, "user1", "h", tenants[0].id).await.unwrap();

    user_role::Model::create(&db, u.id, roles[1].id).await.unwrap();

    let assignments = user_role::Model::find_by_user(&db, u.id).await.unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].role_id, roles[1].id);
}
