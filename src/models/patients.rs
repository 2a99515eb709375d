/// Details collected once per booking attempt, on behalf of whoever the
/// appointment is for (not necessarily the logged-in user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mobile: String,
    pub weight: String,
    pub problem: String,
    pub relationship: String,
}
