use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    /// Masked contact the code was sent to.
    pub sent_to: String,
}

#[derive(Default, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
    pub name: String,
    pub contact: String,
}

#[derive(Default, Serialize)]
pub struct ResendOtpResponse {
    pub success: bool,
    pub err: String,
    pub sent_to: String,
}

#[derive(Default, Serialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub err: String,
    /// "email" or "sms", matching the contact's classification.
    pub channel: String,
    pub sent_to: String,
}

crate::impl_err_response! {
    LoginResponse,
    VerifyOtpResponse,
    ResendOtpResponse,
    ForgotPasswordResponse,
}
