use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub contact: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub contact: String,
    pub otp: String,
}

#[derive(Deserialize)]
pub struct ResendOtpRequest {
    pub contact: String,
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub contact: String,
}
