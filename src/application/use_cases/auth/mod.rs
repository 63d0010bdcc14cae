pub mod firebase_sign_in;
pub mod google_sign_in;
pub mod me;

/// Admin membership ignores case and surrounding whitespace.
pub fn is_admin_email(admin_emails: &[String], email: &str) -> bool {
    let email = email.trim();
    admin_emails
        .iter()
        .any(|admin| admin.trim().eq_ignore_ascii_case(email))
}

/// First non-blank of the requested name, the token's name, then the email.
fn display_name(requested: Option<&str>, from_token: Option<&str>, email: &str) -> String {
    [requested, from_token]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|n| !n.is_empty())
        .unwrap_or(email)
        .to_string()
}
