use rolebook_application::RoleRepository;
use rolebook_core::AppError;
use rolebook_domain::{Privilege, RoleDraft, RoleId, UserId};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresRoleRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres role tests: {error}");
    }

    Some(pool)
}

#[tokio::test]
async fn saved_role_roundtrips_privileges_and_members_in_order() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleRepository::new(pool);
    let members = vec![UserId::new(), UserId::new()];
    let draft = RoleDraft::new(
        "Release Managers",
        vec![Privilege::Update, Privilege::Read, Privilege::Update],
        members.clone(),
    )
    .unwrap_or_else(|_| panic!("draft must be valid"));

    let Ok(saved) = repository.save(draft).await else {
        panic!("role must be saved");
    };

    let stored = repository.find_by_id(saved.id()).await.ok().flatten();
    let Some(stored) = stored else {
        panic!("saved role must be readable");
    };
    assert_eq!(stored.name().as_str(), "Release Managers");
    assert_eq!(
        stored.privileges(),
        &[Privilege::Update, Privilege::Read, Privilege::Update]
    );
    assert_eq!(stored.users(), members.as_slice());
}

#[tokio::test]
async fn update_persists_new_members_and_rejects_unknown_roles() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleRepository::new(pool);
    let draft = RoleDraft::new("Viewers", vec![Privilege::Read], Vec::new())
        .unwrap_or_else(|_| panic!("draft must be valid"));
    let Ok(mut role) = repository.save(draft).await else {
        panic!("role must be saved");
    };

    let member = UserId::new();
    role.add_member(member);
    assert!(repository.update(role.clone()).await.is_ok());

    let stored = repository.find_by_id(role.id()).await.ok().flatten();
    assert_eq!(stored.map(|stored| stored.users().to_vec()), Some(vec![member]));

    let unknown = RoleDraft::new("Ghosts", Vec::new(), Vec::new())
        .unwrap_or_else(|_| panic!("draft must be valid"))
        .into_role(RoleId::new());
    let result = repository.update(unknown).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn list_orders_names_byte_wise_like_the_in_memory_adapter() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleRepository::new(pool);
    let suffix = RoleId::new();
    let mut saved_ids = Vec::new();
    for name in ["beta", "Zeta", "alpha", "Émile", "Alpha"] {
        let draft = RoleDraft::new(format!("{name} {suffix}"), Vec::new(), Vec::new())
            .unwrap_or_else(|_| panic!("draft must be valid"));
        let Ok(role) = repository.save(draft).await else {
            panic!("role must be saved");
        };
        saved_ids.push(role.id());
    }

    let names: Vec<String> = repository
        .list()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|role| saved_ids.contains(&role.id()))
        .map(|role| role.name().as_str().to_owned())
        .collect();

    let expected: Vec<String> = ["Alpha", "Zeta", "alpha", "beta", "Émile"]
        .iter()
        .map(|name| format!("{name} {suffix}"))
        .collect();
    assert_eq!(names, expected);
}
