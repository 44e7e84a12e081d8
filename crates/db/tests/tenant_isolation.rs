//! Integration tests for tenant scoping in the repository layer.
//!
//! Every mutation filters `id AND user_id` in the statement itself, so a
//! row owned by another tenant must be indistinguishable from a missing
//! one: updates return `None`, deletes return `false`, lookups return
//! `None`.

use sqlx::PgPool;

use agendo_db::models::client::{CreateClient, UpdateClient};
use agendo_db::models::link::CreateLink;
use agendo_db::repositories::{AudioRepo, ClientRepo, LinkRepo, ProfileRepo};

const TENANT_A: &str = "user_aaa";
const TENANT_B: &str = "user_bbb";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_client(name: &str) -> CreateClient {
    CreateClient {
        full_name: name.to_string(),
        phone: Some("5511999".to_string()),
        email: None,
        notes: None,
    }
}

async fn seed_audio(pool: &PgPool, user_id: &str, description: &str) {
    use agendo_db::models::audio::CreateAudio;
    AudioRepo::create(
        pool,
        user_id,
        &CreateAudio {
            description: description.to_string(),
            audio_base64: "UklGRg==".to_string(),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Cross-tenant mutations come back empty
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_across_tenants_returns_none(pool: PgPool) {
    let client = ClientRepo::create(&pool, TENANT_A, &new_client("Alice"))
        .await
        .unwrap();

    let update = UpdateClient {
        full_name: Some("Mallory".to_string()),
        phone: None,
        email: None,
        notes: None,
    };

    let result = ClientRepo::update(&pool, client.id, TENANT_B, &update)
        .await
        .unwrap();
    assert!(result.is_none());

    // The row is untouched for its owner.
    let row = ClientRepo::find_by_id(&pool, client.id, TENANT_A)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.full_name, "Alice");
}

#[sqlx::test]
async fn delete_across_tenants_returns_false(pool: PgPool) {
    let client = ClientRepo::create(&pool, TENANT_A, &new_client("Alice"))
        .await
        .unwrap();

    assert!(!ClientRepo::delete(&pool, client.id, TENANT_B).await.unwrap());
    assert!(ClientRepo::delete(&pool, client.id, TENANT_A).await.unwrap());
}

#[sqlx::test]
async fn find_by_id_is_tenant_filtered(pool: PgPool) {
    let client = ClientRepo::create(&pool, TENANT_A, &new_client("Alice"))
        .await
        .unwrap();

    assert!(ClientRepo::find_by_id(&pool, client.id, TENANT_B)
        .await
        .unwrap()
        .is_none());
    assert!(ClientRepo::find_by_id(&pool, client.id, TENANT_A)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Listing scope
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn listing_is_scoped_and_unscoped_for_masters(pool: PgPool) {
    seed_audio(&pool, TENANT_A, "a1").await;
    seed_audio(&pool, TENANT_A, "a2").await;
    seed_audio(&pool, TENANT_B, "b1").await;

    let scoped = AudioRepo::list(&pool, Some(TENANT_A), 20, 0).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|a| a.user_id == TENANT_A));

    // A `None` scope (master key) sees everything.
    let unscoped = AudioRepo::list(&pool, None, 20, 0).await.unwrap();
    assert_eq!(unscoped.len(), 3);
    assert_eq!(AudioRepo::count(&pool, None).await.unwrap(), 3);
}

#[sqlx::test]
async fn pagination_limits_and_counts(pool: PgPool) {
    for i in 0..25 {
        seed_audio(&pool, TENANT_A, &format!("audio {i}")).await;
    }

    let page = AudioRepo::list(&pool, Some(TENANT_A), 20, 0).await.unwrap();
    assert_eq!(page.len(), 20);

    let rest = AudioRepo::list(&pool, Some(TENANT_A), 20, 20).await.unwrap();
    assert_eq!(rest.len(), 5);

    assert_eq!(AudioRepo::count(&pool, Some(TENANT_A)).await.unwrap(), 25);
}

#[sqlx::test]
async fn client_search_matches_name_case_insensitively(pool: PgPool) {
    ClientRepo::create(&pool, TENANT_A, &new_client("Maria Silva"))
        .await
        .unwrap();
    ClientRepo::create(&pool, TENANT_A, &new_client("Joao Souza"))
        .await
        .unwrap();

    let hits = ClientRepo::list(&pool, Some(TENANT_A), Some("maria"), 20, 0)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Maria Silva");

    assert_eq!(
        ClientRepo::count(&pool, Some(TENANT_A), Some("maria"))
            .await
            .unwrap(),
        1
    );
}

// ---------------------------------------------------------------------------
// Profile upsert
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn profile_upsert_keeps_one_row_per_tenant(pool: PgPool) {
    use agendo_db::models::profile::SaveProfile;

    let input = SaveProfile {
        company_name: "Studio Hair".to_string(),
        address: None,
        whatsapp: Some("5511999".to_string()),
        document_number: None,
        location_url: None,
        business_hours: None,
    };
    let first = ProfileRepo::upsert(&pool, TENANT_A, &input).await.unwrap();

    let replaced = SaveProfile {
        company_name: "Studio Hair & Spa".to_string(),
        ..input
    };
    let second = ProfileRepo::upsert(&pool, TENANT_A, &replaced).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.company_name, "Studio Hair & Spa");

    let fetched = ProfileRepo::find_by_user(&pool, TENANT_A)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.company_name, "Studio Hair & Spa");
    assert!(ProfileRepo::find_by_user(&pool, TENANT_B)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Link CRUD smoke
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn link_crud_round_trip(pool: PgPool) {
    let link = LinkRepo::create(
        &pool,
        TENANT_A,
        &CreateLink {
            title: "Booking".to_string(),
            url: "https://example.com/book".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(LinkRepo::count(&pool, Some(TENANT_A)).await.unwrap(), 1);
    assert!(!LinkRepo::delete(&pool, link.id, TENANT_B).await.unwrap());
    assert!(LinkRepo::delete(&pool, link.id, TENANT_A).await.unwrap());
    assert_eq!(LinkRepo::count(&pool, Some(TENANT_A)).await.unwrap(), 0);
}
