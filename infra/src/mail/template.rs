//! Verification email content

/// Subject line of the verification email
pub const VERIFICATION_SUBJECT: &str = "Email verification";

/// Render the HTML body greeting `username` and showing `token`
pub fn verification_email_html(username: &str, token: &str) -> String {
    format!(
        r#"<html>
  <body>
    <h3>Welcome {}!</h3>
    <div>
      <p>Thank you for signing up! Please verify your account using the following code:</p>
    </div>
    <div>
      <p>{}</p>
    </div>
  </body>
</html>"#,
        escape_html(username),
        escape_html(token)
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
