use chrono::NaiveDateTime;

/// A practitioner-join form submission, appended for later review.
#[derive(Debug, Clone)]
pub struct DoctorApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub license_number: String,
    pub experience_years: u32,
    pub hospital: String,
    pub biography: String,
    pub submitted_at: NaiveDateTime,
}
