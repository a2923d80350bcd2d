/// Database test utilities with singleton pattern
///
/// Tests that need PostgreSQL read `TEST_DATABASE_URL` and are `#[ignore]`d
/// by default; run them with `cargo test -- --ignored`.
use cinevault::shared::Database;
use std::sync::{Arc, OnceLock};

static DATABASE: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the shared test database, with migrations applied
pub fn get_test_database() -> Arc<Database> {
    DATABASE
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL")
                .expect("TEST_DATABASE_URL must be set in .env for tests");

            let database = Database::new(&test_db_url).expect("Failed to create test database");
            database
                .run_migrations()
                .expect("Failed to run migrations on test database");

            Arc::new(database)
        })
        .clone()
}

/// A TMDB id unlikely to collide between concurrently running tests
pub fn unique_tmdb_id() -> i32 {
    use std::sync::atomic::{AtomicI32, Ordering};
    static NEXT: AtomicI32 = AtomicI32::new(0);

    let base = (std::process::id() as i32 % 10_000) * 100_000 + 1_000_000;
    base + NEXT.fetch_add(1, Ordering::SeqCst)
}
