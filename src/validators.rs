use anyhow::bail;

/// Classification of a raw contact string entered on the login and
/// forgot-password forms. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Invalid,
}

/// If the string contains `@` it must be email-shaped; otherwise it must
/// reduce to exactly 10 digits once everything that is not a digit is
/// stripped (so `(987) 654-3210` counts as a phone number).
pub fn classify_contact(contact: &str) -> ContactKind {
    if contact.contains('@') {
        if is_email_shaped(contact) {
            ContactKind::Email
        } else {
            ContactKind::Invalid
        }
    } else {
        let digits = contact.chars().filter(|c| c.is_ascii_digit()).count();
        if digits == 10 {
            ContactKind::Phone
        } else {
            ContactKind::Invalid
        }
    }
}

// local@host.suffix, no whitespace, alphabetic suffix of at least two letters
fn is_email_shaped(contact: &str) -> bool {
    let mut parts = contact.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }

    let (host, suffix) = match domain.rfind('.') {
        Some(dot) => (&domain[..dot], &domain[dot + 1..]),
        None => return false,
    };

    !host.is_empty() && suffix.chars().count() >= 2 && suffix.chars().all(|c| c.is_ascii_alphabetic())
}

pub const PASSWORD_SPECIALS: &[char] = &['@', '#', '!'];

/// Password rule shared by the login and doctor-join forms: at least 8
/// characters with one lowercase letter, one uppercase letter, one digit
/// and one of `@#!`. The error names the first unmet requirement.
pub fn check_password(password: &str) -> anyhow::Result<()> {
    if password.chars().count() < 8 {
        bail!("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        bail!("Password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        bail!("Password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        bail!("Password must contain a digit");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(&c)) {
        bail!("Password must contain one of @#!");
    }
    Ok(())
}

pub fn require_field(value: &str, field: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        bail!("{} is required", field);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_well_formed_emails() {
        assert_eq!(classify_contact("user@example.com"), ContactKind::Email);
        assert_eq!(classify_contact("a.b+c@mail.example.org"), ContactKind::Email);
    }

    #[test]
    fn rejects_malformed_emails() {
        assert_eq!(classify_contact("user@example"), ContactKind::Invalid);
        assert_eq!(classify_contact("user@example.c"), ContactKind::Invalid);
        assert_eq!(classify_contact("user@exam ple.com"), ContactKind::Invalid);
        assert_eq!(classify_contact("@example.com"), ContactKind::Invalid);
        assert_eq!(classify_contact("user@.com"), ContactKind::Invalid);
        assert_eq!(classify_contact("user@example.c0m"), ContactKind::Invalid);
    }

    #[test]
    fn classifies_ten_digit_phones() {
        assert_eq!(classify_contact("9876543210"), ContactKind::Phone);
        assert_eq!(classify_contact("(987) 654-3210"), ContactKind::Phone);
    }

    #[test]
    fn rejects_other_strings() {
        assert_eq!(classify_contact("12345"), ContactKind::Invalid);
        assert_eq!(classify_contact("98765432101"), ContactKind::Invalid);
        assert_eq!(classify_contact("hello"), ContactKind::Invalid);
        assert_eq!(classify_contact(""), ContactKind::Invalid);
    }

    #[test]
    fn accepts_valid_password() {
        assert!(check_password("Abcdef1@").is_ok());
        assert!(check_password("xY9!longer-password").is_ok());
    }

    #[test]
    fn rejects_weak_passwords() {
        assert!(check_password("Abcde1@").is_err());
        assert!(check_password("abcdefg1@").is_err());
        assert!(check_password("ABCDEFG1@").is_err());
        assert!(check_password("Abcdefgh@").is_err());
        assert!(check_password("Abcdefg1").is_err());
    }

    #[test]
    fn password_errors_carry_a_reason() {
        let err = check_password("short").unwrap_err();
        assert!(err.to_string().contains("at least 8"));
        let err = check_password("Abcdefg1").unwrap_err();
        assert!(err.to_string().contains("@#!"));
    }

    #[test]
    fn required_fields_must_be_non_blank() {
        assert!(require_field("Asha", "Patient name").is_ok());
        let err = require_field("   ", "Patient name").unwrap_err();
        assert_eq!(err.to_string(), "Patient name is required");
    }
}
