use crate::models::patients::PatientDetails;

pub const APPOINT_STATUS_CONFIRMED: &str = "confirmed";
pub const APPOINT_STATUS_COMPLETED: &str = "completed";
pub const APPOINT_STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: u64,
    /// Display label (`#1`..`#1000`), distinct from `id` and not unique.
    pub number: String,
    pub contact: String,
    pub did: u64,
    pub doctor_name: String,
    pub specialization: String,
    /// Weekday name chosen in the wizard; seed data carries calendar dates.
    pub date: String,
    pub time: String,
    pub status: String,
    pub patient: Option<PatientDetails>,
}

pub fn seed() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            number: "#412".to_string(),
            contact: "priya@example.com".to_string(),
            did: 1,
            doctor_name: "Dr. Prakash Das".to_string(),
            specialization: "Psychologist".to_string(),
            date: "2026-02-25".to_string(),
            time: "02:00 PM".to_string(),
            status: APPOINT_STATUS_CONFIRMED.to_string(),
            patient: None,
        },
        Appointment {
            id: 2,
            number: "#87".to_string(),
            contact: "priya@example.com".to_string(),
            did: 2,
            doctor_name: "Dr. Kumar Das".to_string(),
            specialization: "Ophthalmologist".to_string(),
            date: "2026-02-20".to_string(),
            time: "10:00 AM".to_string(),
            status: APPOINT_STATUS_COMPLETED.to_string(),
            patient: None,
        },
    ]
}
