mod requests;
mod responses;
mod utils;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;
use chrono::Utc;
use tracing::info;

use crate::{
    models::sessions::SessionData,
    otp::OtpSession,
    protocol::SimpleResponse,
    store::Store,
    utils::{gen_login_token, mask_contact},
    validators::{check_password, classify_contact, ContactKind},
};

use self::{requests::*, responses::*, utils::default_display_name};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(verify_otp)
        .service(resend_otp)
        .service(logout)
        .service(forgot_password);
}

crate::post_funcs! {
    (login, "/login", LoginRequest, LoginResponse),
    (verify_otp, "/verify_otp", VerifyOtpRequest, VerifyOtpResponse),
    (resend_otp, "/resend_otp", ResendOtpRequest, ResendOtpResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (forgot_password, "/forgot_password", ForgotPasswordRequest, ForgotPasswordResponse),
}

async fn login_impl(
    store: web::Data<Store>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    let info = info.into_inner();

    let kind = classify_contact(&info.contact);
    if kind == ContactKind::Invalid {
        bail!("Enter a valid email or 10-digit mobile number");
    }
    check_password(&info.password)?;

    let now = Utc::now().naive_utc();
    let display_name = info
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| default_display_name(&info.contact, kind));

    // Re-login while a code is pending simply issues a fresh code.
    let mut state = store.state()?;
    state
        .otp_sessions
        .insert(info.contact.clone(), OtpSession::issue(&info.contact, now));
    state.pending_names.insert(info.contact.clone(), display_name);

    let sent_to = mask_contact(&info.contact);
    info!("OTP issued for {}", sent_to);
    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        sent_to,
    })
}

async fn verify_otp_impl(
    store: web::Data<Store>,
    info: web::Json<VerifyOtpRequest>,
) -> anyhow::Result<VerifyOtpResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    match state.otp_sessions.get_mut(&info.contact) {
        Some(sess) => sess.verify(&info.otp, now)?,
        None => bail!("No OTP was requested for this contact"),
    }
    state.otp_sessions.remove(&info.contact);
    let name = state
        .pending_names
        .remove(&info.contact)
        .unwrap_or_else(|| "Guest".to_string());

    let session = SessionData {
        token: gen_login_token(&info.contact, &now),
        name: name.clone(),
        contact: info.contact.clone(),
        login_time: now,
    };
    let login_token = session.token.clone();
    state.sessions.insert(login_token.clone(), session);

    info!("login verified for {}", mask_contact(&info.contact));
    Ok(VerifyOtpResponse {
        success: true,
        err: "".to_string(),
        login_token,
        name,
        contact: info.contact,
    })
}

async fn resend_otp_impl(
    store: web::Data<Store>,
    info: web::Json<ResendOtpRequest>,
) -> anyhow::Result<ResendOtpResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    let sent_to = match state.otp_sessions.get_mut(&info.contact) {
        Some(sess) => {
            sess.resend(now)?;
            mask_contact(sess.contact())
        }
        None => bail!("No OTP was requested for this contact"),
    };

    info!("OTP re-issued for {}", sent_to);
    Ok(ResendOtpResponse {
        success: true,
        err: "".to_string(),
        sent_to,
    })
}

async fn logout_impl(
    store: web::Data<Store>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();

    let mut state = store.state()?;
    state.sessions.remove(&info.login_token);
    state.wizards.remove(&info.login_token);

    Ok(SimpleResponse::ok())
}

async fn forgot_password_impl(
    _store: web::Data<Store>,
    info: web::Json<ForgotPasswordRequest>,
) -> anyhow::Result<ForgotPasswordResponse> {
    let info = info.into_inner();

    let (channel, sent_to) = match classify_contact(&info.contact) {
        ContactKind::Email => ("email", mask_contact(&info.contact)),
        ContactKind::Phone => ("sms", mask_contact(&info.contact)),
        ContactKind::Invalid => {
            if info.contact.contains('@') {
                bail!("Invalid email format. Example: user@example.com");
            } else {
                bail!("Invalid mobile number. Please enter a 10-digit number.");
            }
        }
    };

    info!("password reset requested via {} for {}", channel, sent_to);
    Ok(ForgotPasswordResponse {
        success: true,
        err: "".to_string(),
        channel: channel.to_string(),
        sent_to,
    })
}
