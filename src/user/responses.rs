use serde::Serialize;

#[derive(Default, Serialize)]
pub struct ViewInfoResponse {
    pub success: bool,
    pub err: String,
    pub name: String,
    pub contact: String,
    pub total_appointments: usize,
    pub completed_appointments: usize,
}

#[derive(Default, Serialize)]
pub struct SearchDoctorItem {
    pub did: u64,
    pub name: String,
    pub specialization: String,
    pub availability: Vec<String>,
    pub slots: Vec<String>,
    pub hours: String,
    pub rating: f32,
    pub reviews: u32,
    pub patients: String,
    pub experience: String,
    pub is_available: bool,
    pub verified: bool,
}

#[derive(Default, Serialize)]
pub struct SearchDoctorResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<SearchDoctorItem>,
}

#[derive(Default, Serialize)]
pub struct SearchRecordItem {
    pub id: u64,
    pub date: String,
    pub doctor_name: String,
    pub specialization: String,
    pub kind: String,
    pub diagnosis: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct SearchRecordResponse {
    pub success: bool,
    pub err: String,
    pub records: Vec<SearchRecordItem>,
}

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub id: u64,
    pub number: String,
    pub did: u64,
    pub doctor_name: String,
    pub specialization: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

/// Shared by the wizard transition endpoints; `step` names the position
/// the flow landed on.
#[derive(Default, Serialize)]
pub struct BookingStepResponse {
    pub success: bool,
    pub err: String,
    pub step: String,
}

#[derive(Default, Serialize)]
pub struct BookPatientResponse {
    pub success: bool,
    pub err: String,
    pub id: u64,
    pub number: String,
    pub msg: String,
}

crate::impl_err_response! {
    ViewInfoResponse,
    SearchDoctorResponse,
    SearchRecordResponse,
    SearchAppointResponse,
    BookingStepResponse,
    BookPatientResponse,
}
