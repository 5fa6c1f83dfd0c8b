//! Fluent Assertion Example
//!
//! This example demonstrates the static chain, the numeric chain and the
//! negated view on a small registration form.
//!
//! Run with: cargo run --example form_checks

use plumbline::{Subject, ValidationError};

#[derive(Debug)]
struct Registration {
    username: Subject<String>,
    referrer: Subject<String>,
    age: u32,
    score: f64,
    accepted_terms: bool,
}

fn validate(form: &Registration) -> Result<(), ValidationError> {
    // Static chain: subject supplied per call
    plumbline::is_defined(&form.username, "username is required")?
        .is_true(form.accepted_terms, "terms must be accepted")?;

    // Negated view: same predicates, inverted outcome
    plumbline::not()
        .is_null(&form.username, "username must not be null")?
        .is_null(&form.referrer, "referrer must be omitted rather than null")?;

    // Numeric chain: one subject, many checks
    plumbline::n(form.age)
        .is_equal_or_greater_than(13, "too young")?
        .is_less_than(130, "age is not plausible")?;

    plumbline::n(form.score).inclusive_between(0.0, 1.0, "score must be within [0, 1]")?;
    plumbline::not()
        .n(form.score)
        .exclusive_between(0.4, 0.6, "score falls in the review band")?;

    Ok(())
}

fn main() {
    println!("=== Fluent Assertion Example ===\n");

    let forms = vec![
        Registration {
            username: Subject::Value("ada".to_string()),
            referrer: Subject::Undefined,
            age: 36,
            score: 0.9,
            accepted_terms: true,
        },
        Registration {
            username: Subject::Undefined,
            referrer: Subject::Undefined,
            age: 36,
            score: 0.9,
            accepted_terms: true,
        },
        Registration {
            username: Subject::Value("bob".to_string()),
            referrer: Subject::Null,
            age: 20,
            score: 0.9,
            accepted_terms: true,
        },
        Registration {
            username: Subject::Value("cy".to_string()),
            referrer: Subject::Undefined,
            age: 9,
            score: 0.9,
            accepted_terms: true,
        },
        Registration {
            username: Subject::Value("dee".to_string()),
            referrer: Subject::Value("ada".to_string()),
            age: 40,
            score: 0.5,
            accepted_terms: true,
        },
    ];

    for form in &forms {
        match validate(form) {
            Ok(()) => println!("  ok       {:?}", form.username),
            Err(e) => println!("  {:<8} {:?}: {}", e.kind(), form.username, e),
        }
    }
}
