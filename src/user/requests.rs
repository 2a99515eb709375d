use serde::Deserialize;

#[derive(Deserialize)]
pub struct ViewInfoRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct ModifyInfoRequest {
    pub login_token: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchDoctorRequest {
    pub login_token: String,
    /// Filter chip; absent or "All" means every specialization.
    pub specialization: Option<String>,
    /// Case-insensitive substring over doctor names.
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchRecordRequest {
    pub login_token: String,
    /// Absent or "all" means every status.
    pub status: Option<String>,
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub login_token: String,
    #[serde(default)]
    pub include_cancelled: bool,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct BookSelectRequest {
    pub login_token: String,
    pub did: u64,
}

#[derive(Deserialize)]
pub struct BookProceedRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct BookScheduleRequest {
    pub login_token: String,
    pub day: String,
    pub slot: String,
}

#[derive(Deserialize)]
pub struct BookPatientRequest {
    pub login_token: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mobile: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub relationship: String,
}

#[derive(Deserialize)]
pub struct BookFinishRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct BookBackRequest {
    pub login_token: String,
}
