use crate::validators::ContactKind;

/// Display name when the login form did not provide one: the mailbox part
/// of an email, or a neutral fallback for phone logins.
pub fn default_display_name(contact: &str, kind: ContactKind) -> String {
    match kind {
        ContactKind::Email => contact.split('@').next().unwrap_or(contact).to_string(),
        _ => "Guest".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_names_from_the_contact() {
        assert_eq!(
            default_display_name("priya@example.com", ContactKind::Email),
            "priya"
        );
        assert_eq!(
            default_display_name("9876543210", ContactKind::Phone),
            "Guest"
        );
    }
}
