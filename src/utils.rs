#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    store: web::Data<Store>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](store, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use blake2::{Blake2b, Digest};
use chrono::NaiveDateTime;

pub fn digest_str(input: &str) -> String {
    format!("{:x}", Blake2b::digest(input.as_bytes()))
}

/// Login tokens are a digest over contact and login instant, so two logins
/// for the same contact get distinct tokens.
pub fn gen_login_token(contact: &str, login_time: &NaiveDateTime) -> String {
    digest_str(&format!("{}|{}", contact, login_time))
}

/// Redacted form of a contact for responses and logs. Emails keep the
/// first three characters and the three before `@` plus the domain; phones
/// keep the first two and last two digits.
pub fn mask_contact(contact: &str) -> String {
    if contact.contains('@') {
        let chars: Vec<char> = contact.chars().collect();
        let at = chars.iter().rposition(|&c| c == '@').unwrap_or(0);
        let prefix: String = chars.iter().take(3.min(at)).collect();
        let tail: String = chars[at.saturating_sub(3)..].iter().collect();
        format!("{}****{}", prefix, tail)
    } else {
        let digits: String = contact.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() >= 4 {
            format!("{}*****{}", &digits[..2], &digits[digits.len() - 2..])
        } else {
            "*****".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn masks_emails_keeping_edges() {
        assert_eq!(mask_contact("priya@example.com"), "pri****iya@example.com");
        assert_eq!(mask_contact("ab@example.com"), "ab****ab@example.com");
    }

    #[test]
    fn masks_phones_keeping_two_digits_each_side() {
        assert_eq!(mask_contact("9876543210"), "98*****10");
        assert_eq!(mask_contact("987"), "*****");
    }

    #[test]
    fn login_tokens_differ_by_login_time() {
        let t1 = NaiveDate::from_ymd(2026, 2, 20).and_hms(9, 0, 0);
        let t2 = NaiveDate::from_ymd(2026, 2, 20).and_hms(9, 0, 1);
        let a = gen_login_token("priya@example.com", &t1);
        let b = gen_login_token("priya@example.com", &t2);
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
