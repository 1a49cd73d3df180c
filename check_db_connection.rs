//! Connectivity check for the Postgres user store.
//!
//! Reads the server's database variables (no `JWT_SECRET` needed), connects,
//! reports what it finds and, with `--migrate`, applies pending migrations.
//! Exits non-zero when the server or the database cannot be reached.

use sqlx::postgres::{PgConnectOptions, PgPool};
use sqlx::Row;
use userbase::backend::server::config::connect_options;
use userbase::backend::users::{PgUserStore, UserStore};
use userbase::shared::DatabaseConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let migrate = std::env::args().any(|arg| arg == "--migrate");

    let database = DatabaseConfig::from_env()?;
    let options = connect_options(&database)?;
    let db_name = options.get_database().unwrap_or("postgres").to_string();

    println!("🔍 CHECKING DATABASE CONNECTION");
    println!("================================");
    println!("Host: {}:{}", options.get_host(), options.get_port());
    println!("User: {}", options.get_username());
    println!("Database name: {}", db_name);

    println!("\n🧪 Testing connection to server...");
    match PgPool::connect_with(options.clone().database("postgres")).await {
        Ok(pool) => {
            println!("✅ Server connection successful!");
            let exists = sqlx::query("SELECT 1 FROM pg_database WHERE datname = $1")
                .bind(&db_name)
                .fetch_optional(&pool)
                .await?
                .is_some();
            if !exists {
                println!("❌ Database '{}' does not exist!", db_name);
                println!("💡 Create it first: CREATE DATABASE \"{}\";", db_name);
                return Err(format!("database '{db_name}' does not exist").into());
            }
            println!("✅ Database '{}' exists!", db_name);
        }
        Err(e) => {
            println!("❌ Server connection failed: {}", e);
            println!("💡 Possible issues:");
            println!("   - Wrong DB_HOST/DB_PORT or DATABASE_URL");
            println!("   - Wrong DB_USERNAME/DB_PASSWORD");
            println!("   - PostgreSQL server not running");
            return Err(e.into());
        }
    }

    check_database(options, migrate).await
}

async fn check_database(options: PgConnectOptions, migrate: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🔗 Connecting to database...");
    let store = PgUserStore::connect(options).await?;

    let row = sqlx::query("SELECT current_database(), current_user, version()")
        .fetch_one(store.pool())
        .await?;
    let db: String = row.get("current_database");
    let user: String = row.get("current_user");
    let version: String = row.get("version");
    println!("📊 Current Database: {}", db);
    println!("👤 Current User: {}", user);
    println!("🔧 PostgreSQL Version: {}", version);

    if migrate {
        println!("\n🚚 Running migrations...");
        store.migrate().await?;
        println!("✅ Migrations applied");
    }

    println!("\n📋 Checking if 'users' table exists...");
    let count: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM information_schema.tables WHERE table_name = 'users'",
    )
    .fetch_one(store.pool())
    .await?;
    if count > 0 {
        let users = store.count().await?;
        println!("✅ Users table exists with {} users", users);
    } else {
        println!("⚠️  Users table does not exist - rerun with --migrate");
    }

    Ok(())
}
