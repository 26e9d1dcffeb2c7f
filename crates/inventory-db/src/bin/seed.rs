//! # Seed Data Generator
//!
//! Populates the database with a small, realistic product set whose expiry
//! dates are spread around today, so every dashboard view has rows.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p inventory-db --bin seed
//!
//! # Seed a specific database file
//! cargo run -p inventory-db --bin seed -- --db ./inventory.db
//!
//! # Seed even if products already exist
//! cargo run -p inventory-db --bin seed -- --force
//! ```
//!
//! ## What Gets Created
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View              Offset from today        Examples                    │
//! │  ─────────────     ──────────────────       ─────────────────────────   │
//! │  Expired           -30 .. -1 days           Milk, Yogurt, Lettuce       │
//! │  Near Expiry       0 .. +7 days             Bread, Eggs, Cheddar        │
//! │  Fresh             +8 days and later        Rice, Pasta, Coffee         │
//! │  No expiry         -                        Paper Towels, Dish Soap     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Days, NaiveDate};
use inventory_core::expiry::today;
use inventory_core::ProductInput;
use inventory_db::{Database, DbConfig, DbError};
use std::env;
use std::process::ExitCode;

/// (name, quantity, days from today; None = never expires)
const SAMPLE_PRODUCTS: &[(&str, i64, Option<i64>)] = &[
    ("Whole Milk 1L", 8, Some(-2)),
    ("Greek Yogurt", 3, Some(-1)),
    ("Romaine Lettuce", 6, Some(-30)),
    ("Sourdough Bread", 4, Some(0)),
    ("Free Range Eggs (12)", 20, Some(2)),
    ("Cheddar Cheese", 11, Some(7)),
    ("Orange Juice", 2, Some(5)),
    ("Chicken Breast", 9, Some(3)),
    ("Basmati Rice 5kg", 14, Some(365)),
    ("Penne Pasta", 30, Some(240)),
    ("Ground Coffee", 7, Some(90)),
    ("Canned Tomatoes", 48, Some(540)),
    ("Peanut Butter", 1, Some(120)),
    ("Paper Towels", 25, None),
    ("Dish Soap", 4, None),
];

fn offset_date(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        today.checked_add_days(magnitude)
    } else {
        today.checked_sub_days(magnitude)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("inventory.db");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Inventory Tracker Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>  Database path [default: inventory.db]");
                println!("  -f, --force      Seed even if products already exist");
                println!("  -h, --help       Print help");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    match seed(&db_path, force).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn seed(db_path: &str, force: bool) -> Result<(), DbError> {
    println!("🌱 Inventory Tracker Seed Data Generator");
    println!("   Database: {db_path}");
    println!();

    println!("📂 Connecting to database...");
    let db = Database::new(DbConfig::new(db_path)).await?;

    let existing = db.products().count().await?;
    if existing > 0 && !force {
        println!("⚠️  Database already has {existing} products. Use --force to add more.");
        return Ok(());
    }

    let today = today();
    println!("📦 Inserting {} products (today = {today})...", SAMPLE_PRODUCTS.len());

    for (name, quantity, offset) in SAMPLE_PRODUCTS {
        let input = ProductInput {
            name: (*name).to_string(),
            quantity: *quantity,
            expiry_date: offset.and_then(|days| offset_date(today, days)),
        };
        let product = db.products().create(&input).await?;
        println!("   #{:<4} {}", product.id, product.name);
    }

    let expired = db.products().list_expired(today).await?.len();
    let near = db.products().list_near_expiry(today).await?.len();
    let total = db.products().count().await?;

    println!();
    println!("✅ Done: {total} products ({expired} expired, {near} near expiry)");

    db.close().await;
    Ok(())
}
