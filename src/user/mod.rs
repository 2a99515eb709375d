mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;
use chrono::Utc;
use tracing::info;

use crate::{
    models::appointments::APPOINT_STATUS_COMPLETED,
    models::patients::PatientDetails,
    models::records::{RECORD_STATUS_FOLLOW_UP, RECORD_STATUS_NORMAL, RECORD_STATUS_URGENT},
    protocol::SimpleResponse,
    store::{assert, Store},
    validators::require_field,
    wizard::BookingStep,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(view_info)
        .service(modify_info)
        .service(search_doctor)
        .service(search_record)
        .service(search_appoint)
        .service(cancel_appoint)
        .service(book_select)
        .service(book_proceed)
        .service(book_schedule)
        .service(book_patient)
        .service(book_finish)
        .service(book_back);
}

crate::post_funcs! {
    (view_info, "/view_info", ViewInfoRequest, ViewInfoResponse),
    (modify_info, "/modify_info", ModifyInfoRequest, SimpleResponse),
    (search_doctor, "/search_doctor", SearchDoctorRequest, SearchDoctorResponse),
    (search_record, "/search_record", SearchRecordRequest, SearchRecordResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
    (book_select, "/book_select", BookSelectRequest, BookingStepResponse),
    (book_proceed, "/book_proceed", BookProceedRequest, BookingStepResponse),
    (book_schedule, "/book_schedule", BookScheduleRequest, BookingStepResponse),
    (book_patient, "/book_patient", BookPatientRequest, BookPatientResponse),
    (book_finish, "/book_finish", BookFinishRequest, BookingStepResponse),
    (book_back, "/book_back", BookBackRequest, BookingStepResponse),
}

async fn view_info_impl(
    store: web::Data<Store>,
    info: web::Json<ViewInfoRequest>,
) -> anyhow::Result<ViewInfoResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let state = store.state()?;
    let sess = state.session(&info.login_token, now)?;

    let total_appointments = state
        .appointments
        .iter()
        .filter(|a| a.contact == sess.contact)
        .count();
    let completed_appointments = state
        .appointments
        .iter()
        .filter(|a| a.contact == sess.contact && a.status == APPOINT_STATUS_COMPLETED)
        .count();

    Ok(ViewInfoResponse {
        success: true,
        err: "".to_string(),
        name: sess.name,
        contact: sess.contact,
        total_appointments,
        completed_appointments,
    })
}

async fn modify_info_impl(
    store: web::Data<Store>,
    info: web::Json<ModifyInfoRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    require_field(&info.name, "Name")?;

    let mut state = store.state()?;
    state.session(&info.login_token, now)?;
    if let Some(sess) = state.sessions.get_mut(&info.login_token) {
        sess.name = info.name.trim().to_string();
    }

    Ok(SimpleResponse::ok())
}

async fn search_doctor_impl(
    store: web::Data<Store>,
    info: web::Json<SearchDoctorRequest>,
) -> anyhow::Result<SearchDoctorResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    store.state()?.session(&info.login_token, now)?;

    let specialization = info
        .specialization
        .filter(|s| !s.is_empty() && s != "All");
    let query = info.query.unwrap_or_default().to_lowercase();

    let doctors = store
        .doctors()
        .iter()
        .filter(|d| match &specialization {
            Some(s) => &d.specialization == s,
            None => true,
        })
        .filter(|d| query.is_empty() || d.name.to_lowercase().contains(&query))
        .map(|d| SearchDoctorItem {
            did: d.did,
            name: d.name.clone(),
            specialization: d.specialization.clone(),
            availability: d.availability.clone(),
            slots: d.slots.clone(),
            hours: d.hours.clone(),
            rating: d.rating,
            reviews: d.reviews,
            patients: d.patients.clone(),
            experience: d.experience.clone(),
            is_available: d.is_available,
            verified: d.verified,
        })
        .collect();

    Ok(SearchDoctorResponse {
        success: true,
        err: "".to_string(),
        doctors,
    })
}

async fn search_record_impl(
    store: web::Data<Store>,
    info: web::Json<SearchRecordRequest>,
) -> anyhow::Result<SearchRecordResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    store.state()?.session(&info.login_token, now)?;

    let status = info.status.filter(|s| !s.is_empty() && s != "all");
    if let Some(s) = &status {
        let known = [
            RECORD_STATUS_NORMAL,
            RECORD_STATUS_FOLLOW_UP,
            RECORD_STATUS_URGENT,
        ];
        if !known.contains(&s.as_str()) {
            bail!("Unknown record status filter");
        }
    }
    let query = info.query.unwrap_or_default().to_lowercase();

    let records = store
        .records()
        .iter()
        .filter(|r| match &status {
            Some(s) => &r.status == s,
            None => true,
        })
        .filter(|r| {
            query.is_empty()
                || r.doctor_name.to_lowercase().contains(&query)
                || r.diagnosis.to_lowercase().contains(&query)
                || r.specialization.to_lowercase().contains(&query)
        })
        .map(|r| SearchRecordItem {
            id: r.id,
            date: r.date.clone(),
            doctor_name: r.doctor_name.clone(),
            specialization: r.specialization.clone(),
            kind: r.kind.clone(),
            diagnosis: r.diagnosis.clone(),
            status: r.status.clone(),
        })
        .collect();

    Ok(SearchRecordResponse {
        success: true,
        err: "".to_string(),
        records,
    })
}

async fn search_appoint_impl(
    store: web::Data<Store>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let state = store.state()?;
    let sess = state.session(&info.login_token, now)?;

    let appointments = state
        .appointments_for(&sess.contact, info.include_cancelled)
        .into_iter()
        .map(|a| SearchAppointItem {
            id: a.id,
            number: a.number.clone(),
            did: a.did,
            doctor_name: a.doctor_name.clone(),
            specialization: a.specialization.clone(),
            date: a.date.clone(),
            time: a.time.clone(),
            status: a.status.clone(),
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments,
    })
}

async fn cancel_appoint_impl(
    store: web::Data<Store>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    let sess = state.session(&info.login_token, now)?;
    state.cancel_appointment(&sess.contact, info.id)?;

    info!("appointment {} cancelled", info.id);
    Ok(SimpleResponse::ok())
}

async fn book_select_impl(
    store: web::Data<Store>,
    info: web::Json<BookSelectRequest>,
) -> anyhow::Result<BookingStepResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let doctor = assert::assert_doctor(&store, info.did)?.clone();
    let mut state = store.state()?;
    state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let next = step.select_doctor(&doctor)?;
    state.wizards.insert(info.login_token, next.clone());

    Ok(step_response(&next))
}

async fn book_proceed_impl(
    store: web::Data<Store>,
    info: web::Json<BookProceedRequest>,
) -> anyhow::Result<BookingStepResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let did = match step.doctor_id() {
        Some(did) => did,
        None => bail!("No doctor selected"),
    };
    let doctor = assert::assert_doctor(&store, did)?;
    let next = step.proceed(doctor)?;
    state.wizards.insert(info.login_token, next.clone());

    Ok(step_response(&next))
}

async fn book_schedule_impl(
    store: web::Data<Store>,
    info: web::Json<BookScheduleRequest>,
) -> anyhow::Result<BookingStepResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let did = match step.doctor_id() {
        Some(did) => did,
        None => bail!("Select a doctor before choosing a time"),
    };
    let doctor = assert::assert_doctor(&store, did)?;
    let next = step.choose_schedule(doctor, &info.day, &info.slot)?;
    state.wizards.insert(info.login_token, next.clone());

    Ok(step_response(&next))
}

async fn book_patient_impl(
    store: web::Data<Store>,
    info: web::Json<BookPatientRequest>,
) -> anyhow::Result<BookPatientResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    let sess = state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let did = match step.doctor_id() {
        Some(did) => did,
        None => bail!("Choose a day and time before entering patient details"),
    };
    let doctor = assert::assert_doctor(&store, did)?;

    let patient = PatientDetails {
        name: info.name,
        age: info.age,
        gender: info.gender,
        mobile: info.mobile,
        weight: info.weight,
        problem: info.problem,
        relationship: info.relationship,
    };
    let id = state.next_appointment_id;
    let (next, appointment) = step.submit_patient(doctor, &sess.contact, patient, id)?;

    state.next_appointment_id += 1;
    let msg = format!(
        "Appointment booked with {} on {} at {}",
        appointment.doctor_name, appointment.date, appointment.time
    );
    let number = appointment.number.clone();
    info!(
        "appointment {} booked with {} for {}",
        number, appointment.doctor_name, appointment.date
    );
    state.appointments.push(appointment);
    state.wizards.insert(info.login_token, next);

    Ok(BookPatientResponse {
        success: true,
        err: "".to_string(),
        id,
        number,
        msg,
    })
}

async fn book_finish_impl(
    store: web::Data<Store>,
    info: web::Json<BookFinishRequest>,
) -> anyhow::Result<BookingStepResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let next = step.finish()?;
    state.wizards.insert(info.login_token, next.clone());

    Ok(step_response(&next))
}

async fn book_back_impl(
    store: web::Data<Store>,
    info: web::Json<BookBackRequest>,
) -> anyhow::Result<BookingStepResponse> {
    let info = info.into_inner();
    let now = Utc::now().naive_utc();

    let mut state = store.state()?;
    state.session(&info.login_token, now)?;

    let step = state
        .wizards
        .get(&info.login_token)
        .cloned()
        .unwrap_or_default();
    let next = step.back()?;
    state.wizards.insert(info.login_token, next.clone());

    Ok(step_response(&next))
}

fn step_response(step: &BookingStep) -> BookingStepResponse {
    BookingStepResponse {
        success: true,
        err: "".to_string(),
        step: step.name().to_string(),
    }
}
