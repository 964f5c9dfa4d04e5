//! A schema built once can be validated from many threads at the same time.

use std::sync::Arc;
use std::thread;

use input_validator::prelude::*;
use serde_json::json;

#[test]
fn shared_schema_validates_concurrently() {
    let schema: SharedValidator = object(fields! {
        "id" => number().integer().min(0),
        "name" => string().min_length(2),
        "tags" => array(string()).max_items(3),
    })
    .shared();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|worker| {
                let schema = Arc::clone(&schema);
                scope.spawn(move || {
                    let mut failures = 0;
                    for id in 0..200i64 {
                        let name = if (id + worker) % 10 == 0 { "x" } else { "valid" };
                        let result = schema.validate_json(&json!({
                            "id": id,
                            "name": name,
                            "tags": ["a", "b"],
                        }));
                        assert_eq!(result.is_valid(), name != "x");
                        if result.is_invalid() {
                            assert_eq!(result.errors()[0].path, path!["name"]);
                            failures += 1;
                        }
                    }
                    failures
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), 20);
        }
    });
}

#[test]
fn builders_can_be_derived_on_other_threads() {
    let base = string().min_length(2);

    thread::scope(|scope| {
        let strict = scope.spawn(|| base.clone().max_length(3));
        let loose = scope.spawn(|| base.clone().optional());

        let strict = strict.join().expect("builder thread panicked");
        let loose = loose.join().expect("builder thread panicked");

        assert!(strict.validate(&"long".into()).is_invalid());
        assert!(loose.validate(&Value::Null).is_valid());
        assert!(base.validate(&"long".into()).is_valid());
    });
}
