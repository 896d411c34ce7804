//! Basic usage example
//!
//! This example demonstrates the connector's fetch protocol:
//! - Executing statements and handling statement failures
//! - Iterating a cursor until its terminal signal
//! - Lossy value conversions
//! - Scalar fetches
//!
//! Run with: cargo run --example basic_usage

use sql_connector::prelude::*;

fn main() -> Result<()> {
    println!("=== SQL Connector - Basic Usage Example ===\n");

    let conn = SqliteConnection::open(ConnectionConfig::in_memory().with_busy_timeout_ms(500))?;

    println!("1. Creating and populating table...");
    conn.execute_batch(
        "CREATE TABLE items (
            id INTEGER PRIMARY KEY,
            name TEXT,
            price REAL,
            in_stock BOOLEAN,
            picture BLOB
        );
        INSERT INTO items (name, price, in_stock, picture) VALUES ('widget', 2.5, 1, NULL);
        INSERT INTO items (name, price, in_stock, picture) VALUES ('42', 10.0, 0, X'00');",
    )?;
    println!("   ✓ Table ready\n");

    println!("2. Iterating rows...");
    let mut cursor = conn.execute("SELECT * FROM items ORDER BY id").into_result()?;
    println!("   Columns: {:?}", cursor.column_names());
    for result in cursor.rows() {
        match result {
            FetchResult::Data(row) => {
                for (name, value) in row.column_names().iter().zip(row.values()) {
                    println!(
                        "     {:<9} {:<28} string={:?} int={:?} bool={:?}",
                        name,
                        format!("{:?}", value),
                        value.string_value(),
                        value.int_value(),
                        value.bool_value()
                    );
                }
                println!();
            }
            FetchResult::Empty => println!("   ✓ No more rows\n"),
            FetchResult::Failure(message) => println!("   ✗ Fetch failed: {}\n", message),
        }
    }

    println!("3. Statement failure...");
    match conn.execute("SELEC * FROM items") {
        ExecutionResult::Success(_) => println!("   unexpected success\n"),
        ExecutionResult::Failure(message) => println!("   ✓ Rejected: {}\n", message),
    }

    println!("4. Scalar fetch...");
    let count = conn.query_scalar("SELECT COUNT(*) FROM items").into_result()?;
    println!("   ✓ Item count: {:?}\n", count.int_value());

    println!("=== Example completed successfully ===");
    Ok(())
}
