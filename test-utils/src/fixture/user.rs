use serde_json::{json, Value};

/// User in the stored layout.
///
/// The password fields hold a throwaway hash; tests never log in with a password.
pub fn stored(
    id: &str,
    username: &str,
    roles: &[&str],
    verified: bool,
    verification_token: Option<&str>,
) -> Value {
    let mut user = json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "password_hash": "",
        "password_salt": "",
        "roles": roles,
        "isVerified": verified,
    });

    if let Some(token) = verification_token {
        user["verificationToken"] = json!(token);
    }

    user
}
