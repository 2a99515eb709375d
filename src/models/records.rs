pub const RECORD_STATUS_NORMAL: &str = "normal";
pub const RECORD_STATUS_FOLLOW_UP: &str = "follow-up-needed";
pub const RECORD_STATUS_URGENT: &str = "urgent";

#[derive(Debug, Clone)]
pub struct RecordData {
    pub id: u64,
    pub date: String,
    pub doctor_name: String,
    pub specialization: String,
    /// Visit type, e.g. "Consultation" or "Follow-up".
    pub kind: String,
    pub diagnosis: String,
    pub status: String,
}

pub fn catalog() -> Vec<RecordData> {
    vec![
        RecordData {
            id: 1,
            date: "2026-02-20".to_string(),
            doctor_name: "Dr. Prakash Das".to_string(),
            specialization: "Psychologist".to_string(),
            kind: "Consultation".to_string(),
            diagnosis: "Mild Anxiety".to_string(),
            status: RECORD_STATUS_FOLLOW_UP.to_string(),
        },
        RecordData {
            id: 2,
            date: "2026-02-15".to_string(),
            doctor_name: "Dr. Kumar Das".to_string(),
            specialization: "Ophthalmologist".to_string(),
            kind: "Eye Checkup".to_string(),
            diagnosis: "Normal Vision".to_string(),
            status: RECORD_STATUS_NORMAL.to_string(),
        },
        RecordData {
            id: 3,
            date: "2026-02-10".to_string(),
            doctor_name: "Dr. Prakash Das".to_string(),
            specialization: "Psychologist".to_string(),
            kind: "Follow-up".to_string(),
            diagnosis: "Progress Good".to_string(),
            status: RECORD_STATUS_NORMAL.to_string(),
        },
        RecordData {
            id: 4,
            date: "2026-02-05".to_string(),
            doctor_name: "Dr. Prakash Das".to_string(),
            specialization: "Psychologist".to_string(),
            kind: "Initial Consultation".to_string(),
            diagnosis: "Assessment Complete".to_string(),
            status: RECORD_STATUS_NORMAL.to_string(),
        },
    ]
}
