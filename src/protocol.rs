use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

/// Like `SimpleResponse` but carrying the status line the flow screens
/// display ("Appointment booked with ...", "Application received!", ...).
#[derive(Default, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub err: String,
    pub msg: String,
}

impl MessageResponse {
    pub fn ok<S: ToString>(msg: S) -> Self {
        Self {
            success: true,
            err: "".to_string(),
            msg: msg.to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
    MessageResponse,
}
