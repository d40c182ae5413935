//! Email helpers for log output

/// Mask the local part of an email address for logging
///
/// Keeps the first and last character of the local part and the full domain.
///
/// # Example
///
/// ```
/// use mv_shared::utils::email::mask_email;
/// assert_eq!(mask_email("alice@example.com"), "a***e@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return "*".repeat(email.chars().count());
    };

    let chars: Vec<char> = local.chars().collect();
    let masked_local = match chars.len() {
        0 => String::new(),
        1 | 2 => "*".repeat(chars.len()),
        n => format!("{}***{}", chars[0], chars[n - 1]),
    };

    format!("{}@{}", masked_local, domain)
}
