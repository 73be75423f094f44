// Validating a signup request body with fieldcheck
// Usage: cargo run --example signup

use fieldcheck_core::Validator;
use serde::Deserialize;

#[derive(Deserialize)]
struct Signup {
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    bio: Option<String>,
}

fn run_rules(validator: &mut Validator) {
    validator.required(&["name", "email", "age"]);
    validator.string(&["name", "bio"]);
    validator.number(&["age"]);
    validator.min_chars("bio", 2);
    validator.max_chars("bio", 160);
    validator.email("email");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A broken body: blank name, malformed email address
    let body = br#"{
        "name": "  ",
        "email": "kay.example.com",
        "age": 34,
        "bio": "Keeps bees."
    }"#;

    // Decode the payload and bind it into the handler's own type
    let (mut validator, _) = Validator::from_slice::<Signup>(body)?;
    run_rules(&mut validator);

    // One pass reports every broken field at once
    println!("rejected: {}", validator.report());
    println!("as JSON:  {}", String::from_utf8(validator.to_json()?)?);

    // The same rules over a clean body
    let body = br#"{
        "name": "Kay Doe",
        "email": "kay@example.com",
        "age": 34,
        "bio": "Keeps bees. Writes validators."
    }"#;

    let (mut validator, signup) = Validator::from_slice::<Signup>(body)?;
    run_rules(&mut validator);

    if validator.is_valid() {
        println!(
            "welcome {} <{}>, age {}: {}",
            signup.name.unwrap_or_default(),
            signup.email.unwrap_or_default(),
            signup.age.unwrap_or_default(),
            signup.bio.unwrap_or_default(),
        );
    }

    Ok(())
}
