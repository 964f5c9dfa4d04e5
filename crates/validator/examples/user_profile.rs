//! Validating a user profile against a nested schema.
//!
//! Run: `cargo run -p input-validator --example user_profile`
//! Set `RUST_LOG=input_validator=trace` to see per-composite summaries.

use input_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let schema = user_schema();

    println!("=== Valid Profile ===\n");
    let valid = json!({
        "id": "12345",
        "name": "John Doe",
        "email": "john@example.com",
        "is_active": true,
        "tags": ["developer", "designer"],
        "address": {
            "street": "123 Main St",
            "city": "Anytown",
            "postal_code": "12345",
            "country": "USA"
        }
    });
    print_outcome(&schema.validate_json(&valid));

    println!("\n=== Invalid Profile ===\n");
    let invalid = json!({
        "id": 123,
        "name": "J",
        "email": "invalid-email",
        "is_active": "yes",
        "tags": "not-an-array",
        "address": {"postal_code": "1234"}
    });
    print_outcome(&schema.validate_json(&invalid));
}

fn user_schema() -> SharedValidator {
    let address = object(fields! {
        "street" => string(),
        "city" => string(),
        "postal_code" => string().pattern(r"\d{5}").with_message("Postal code must be 5 digits"),
        "country" => string(),
    });

    object(fields! {
        "id" => string().with_message("ID must be a string"),
        "name" => string().min_length(2).max_length(50),
        "email" => string().pattern(r"[^\s@]+@[^\s@]+\.[^\s@]+"),
        "age" => number().optional(),
        "is_active" => boolean(),
        "tags" => array(string()),
        "address" => address.optional(),
        "metadata" => object(fields! {}).optional(),
    })
    .shared()
}

fn print_outcome(result: &ValidationResult) {
    if let Some(value) = result.value() {
        println!("Validation passed. Validated data:\n  {value}");
        return;
    }

    println!("Validation failed with {} error(s):", result.errors().len());
    for error in result.errors() {
        println!("  - {error}");
    }
}
