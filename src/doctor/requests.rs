use serde::Deserialize;

#[derive(Deserialize)]
pub struct JoinRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub license_number: String,
    /// Years of practice, as typed into the form.
    pub experience: String,
    pub hospital: String,
    pub biography: String,
}
