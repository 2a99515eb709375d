mod requests;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{anyhow, bail};
use chrono::Utc;
use tracing::info;

use crate::{
    models::applications::DoctorApplication,
    protocol::MessageResponse,
    store::Store,
    utils::mask_contact,
    validators::{classify_contact, require_field, ContactKind},
};

use self::requests::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(join);
}

crate::post_funcs! {
    (join, "/join", JoinRequest, MessageResponse),
}

async fn join_impl(
    store: web::Data<Store>,
    info: web::Json<JoinRequest>,
) -> anyhow::Result<MessageResponse> {
    let info = info.into_inner();

    require_field(&info.full_name, "Full name")?;
    require_field(&info.specialization, "Specialization")?;
    require_field(&info.license_number, "Medical license number")?;
    require_field(&info.hospital, "Hospital or clinic name")?;
    require_field(&info.biography, "Professional biography")?;

    if classify_contact(&info.email) != ContactKind::Email {
        bail!("Enter a valid email address");
    }
    if classify_contact(&info.phone) != ContactKind::Phone {
        bail!("Enter a valid 10-digit phone number");
    }
    let experience_years: u32 = info
        .experience
        .trim()
        .parse()
        .map_err(|_| anyhow!("Years of experience must be a whole number"))?;

    let application = DoctorApplication {
        full_name: info.full_name,
        email: info.email,
        phone: info.phone,
        specialization: info.specialization,
        license_number: info.license_number,
        experience_years,
        hospital: info.hospital,
        biography: info.biography,
        submitted_at: Utc::now().naive_utc(),
    };
    info!(
        "doctor application received from {} for {}",
        mask_contact(&application.email),
        application.specialization
    );
    store.state()?.applications.push(application);
    Ok(MessageResponse::ok(
        "Application received! Our team will review it and contact you within 24 hours.",
    ))
}
