use chrono::NaiveDateTime;

/// The one persisted record of the prototype (`{ name, contact }` in
/// browser storage), made an explicit store entry keyed by login token.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub token: String,
    pub name: String,
    pub contact: String,
    pub login_time: NaiveDateTime,
}
