//! PostgreSQL Store Tests
//!
//! Runs the repository contract against a real database. Ignored by
//! default; run with `TEST_POSTGRES_URL` pointing at a database the tests may
//! write to and `cargo test -- --ignored`.

use stockd::stock::NewStock;
use stockd::store::{PgStockRepository, StockRepository};
use tokio::sync::OnceCell;

const SCHEMA: &str = include_str!("../sql/stocks.sql");

// Tests run in parallel; create the table once.
static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

async fn repository() -> PgStockRepository {
    let url = std::env::var("TEST_POSTGRES_URL")
        .expect("TEST_POSTGRES_URL must be set to run PostgreSQL store tests");
    let repo = PgStockRepository::connect(&url, 2).await.unwrap();
    SCHEMA_READY
        .get_or_init(|| async {
            sqlx::query(SCHEMA).execute(repo.pool()).await.unwrap();
        })
        .await;
    repo
}

fn stock(name: &str, price: f64) -> NewStock {
    NewStock {
        name: name.to_string(),
        price,
        company: "Acme Corp".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires TEST_POSTGRES_URL"]
async fn test_insert_fetch_update_delete() {
    let repo = repository().await;

    let id = repo.insert(&stock("Acme", 10.5)).await.unwrap();
    assert_eq!(repo.fetch_one(id).await.unwrap(), stock("Acme", 10.5).with_id(id));

    assert_eq!(repo.update(id, &stock("Acme2", 12.0)).await.unwrap(), 1);
    assert_eq!(repo.fetch_one(id).await.unwrap(), stock("Acme2", 12.0).with_id(id));

    let all = repo.fetch_all().await.unwrap();
    assert!(all.iter().any(|s| s.id == id));

    assert_eq!(repo.delete(id).await.unwrap(), 1);
    assert!(repo.fetch_one(id).await.unwrap_err().is_not_found());
    assert_eq!(repo.delete(id).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires TEST_POSTGRES_URL"]
async fn test_update_missing_row_creates_nothing() {
    let repo = repository().await;

    assert_eq!(repo.update(i64::MAX, &stock("Ghost", 1.0)).await.unwrap(), 0);
    assert!(repo.fetch_one(i64::MAX).await.unwrap_err().is_not_found());
    assert!(repo.fetch_all().await.unwrap().iter().all(|s| s.name != "Ghost"));
}

#[tokio::test]
#[ignore = "requires TEST_POSTGRES_URL"]
async fn test_ping() {
    let repo = repository().await;
    repo.ping().await.unwrap();
}
