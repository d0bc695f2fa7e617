//! Database migration runner for Ledgerly.
//!
//! Reads `DATABASE_URL` (or `.env`). Usage:
//!   migrator up      - Create users, sessions and statements
//!   migrator down    - Drop them again
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use ledgerly_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // sea-orm-migration sets up its own tracing
    cli::run_cli(Migrator).await;
}
