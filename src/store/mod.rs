pub mod assert;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, bail};
use chrono::NaiveDateTime;

use crate::models::applications::DoctorApplication;
use crate::models::appointments::{
    self, Appointment, APPOINT_STATUS_CANCELLED, APPOINT_STATUS_COMPLETED,
};
use crate::models::doctors::{self, DoctorData};
use crate::models::records::{self, RecordData};
use crate::models::sessions::SessionData;
use crate::otp::OtpSession;
use crate::wizard::BookingStep;

pub const MAX_LOGIN_TIME_SECS: i64 = 3600;

/// All mutable state of the service. One user-facing flow at a time per
/// session; one lock over the lot, which matches the single-writer nature
/// of the prototype this replaces.
pub struct AppState {
    /// login token -> session record
    pub sessions: HashMap<String, SessionData>,
    /// contact -> pending OTP machine
    pub otp_sessions: HashMap<String, OtpSession>,
    /// contact -> display name requested at login, consumed on verification
    pub pending_names: HashMap<String, String>,
    /// login token -> booking wizard position
    pub wizards: HashMap<String, BookingStep>,
    pub appointments: Vec<Appointment>,
    pub applications: Vec<DoctorApplication>,
    pub next_appointment_id: u64,
}

impl AppState {
    /// Looks the session up and rejects tokens older than the login
    /// lifetime. Returns a clone so callers can keep mutating the state
    /// afterwards.
    pub fn session(&self, token: &str, now: NaiveDateTime) -> anyhow::Result<SessionData> {
        match self.sessions.get(token) {
            Some(sess) => {
                let age = now.signed_duration_since(sess.login_time);
                if age.num_seconds() <= MAX_LOGIN_TIME_SECS {
                    Ok(sess.clone())
                } else {
                    bail!("Login has expired");
                }
            }
            None => bail!("You are not logged in"),
        }
    }

    pub fn appointments_for(&self, contact: &str, include_cancelled: bool) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.contact == contact)
            .filter(|a| include_cancelled || a.status != APPOINT_STATUS_CANCELLED)
            .collect()
    }

    /// Cancel keeps the record and flips its status; only a confirmed
    /// appointment is cancellable.
    pub fn cancel_appointment(&mut self, contact: &str, id: u64) -> anyhow::Result<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.contact == contact && a.id == id);
        match appointment {
            None => bail!("No such appointment"),
            Some(a) => match a.status.as_str() {
                APPOINT_STATUS_COMPLETED => bail!("Appointment already completed"),
                APPOINT_STATUS_CANCELLED => bail!("Appointment already cancelled"),
                _ => {
                    a.status = APPOINT_STATUS_CANCELLED.to_string();
                    Ok(())
                }
            },
        }
    }
}

/// Shared handle injected into every handler. The fixed catalogs live
/// outside the lock; everything the flows mutate lives behind it.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<AppState>>,
    doctors: Arc<Vec<DoctorData>>,
    records: Arc<Vec<RecordData>>,
}

impl Store {
    pub fn new() -> Self {
        let seed = appointments::seed();
        let next_appointment_id = seed.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(AppState {
                sessions: HashMap::new(),
                otp_sessions: HashMap::new(),
                pending_names: HashMap::new(),
                wizards: HashMap::new(),
                appointments: seed,
                applications: Vec::new(),
                next_appointment_id,
            })),
            doctors: Arc::new(doctors::catalog()),
            records: Arc::new(records::catalog()),
        }
    }

    pub fn state(&self) -> anyhow::Result<MutexGuard<AppState>> {
        self.state.lock().map_err(|_| anyhow!("State lock poisoned"))
    }

    pub fn doctors(&self) -> &[DoctorData] {
        &self.doctors
    }

    pub fn records(&self) -> &[RecordData] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::patients::PatientDetails;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd(2026, 2, 20).and_hms(9, 0, 0)
    }

    fn logged_in(store: &Store, contact: &str) -> String {
        let token = format!("token-{}", contact);
        store.state().unwrap().sessions.insert(
            token.clone(),
            SessionData {
                token: token.clone(),
                name: "Asha".to_string(),
                contact: contact.to_string(),
                login_time: now(),
            },
        );
        token
    }

    #[test]
    fn sessions_expire_after_the_login_lifetime() {
        let store = Store::new();
        let token = logged_in(&store, "asha@example.com");
        let state = store.state().unwrap();

        assert!(state.session(&token, now()).is_ok());
        let late = now() + Duration::seconds(MAX_LOGIN_TIME_SECS + 1);
        assert!(state.session(&token, late).is_err());
        assert!(state.session("bogus", now()).is_err());
    }

    #[test]
    fn booking_walk_appends_exactly_one_appointment() {
        let store = Store::new();
        let token = logged_in(&store, "asha@example.com");
        let doctor = store.doctors()[0].clone();
        let mut state = store.state().unwrap();
        let before = state.appointments.len();

        // the same sequence the /user/book_* handlers drive
        let step = BookingStep::default();
        let step = step.select_doctor(&doctor).unwrap();
        let step = step.proceed(&doctor).unwrap();
        let step = step.choose_schedule(&doctor, "Monday", "09:00 AM").unwrap();
        let id = state.next_appointment_id;
        let (step, appointment) = step
            .submit_patient(
                &doctor,
                "asha@example.com",
                PatientDetails {
                    name: "Asha".to_string(),
                    age: "30".to_string(),
                    gender: "Female".to_string(),
                    mobile: "9876543210".to_string(),
                    weight: String::new(),
                    problem: String::new(),
                    relationship: String::new(),
                },
                id,
            )
            .unwrap();
        state.next_appointment_id += 1;
        state.appointments.push(appointment);
        state.wizards.insert(token, step.finish().unwrap());

        assert_eq!(state.appointments.len(), before + 1);
        let booked = state.appointments.last().unwrap();
        assert_eq!(booked.status, appointments::APPOINT_STATUS_CONFIRMED);
        assert!(!booked.number.is_empty());
        assert_eq!(state.appointments_for("asha@example.com", false).len(), 1);
    }

    #[test]
    fn cancelled_appointments_leave_the_active_view_but_stay_stored() {
        let store = Store::new();
        let mut state = store.state().unwrap();

        let active = state.appointments_for("priya@example.com", false).len();
        state.cancel_appointment("priya@example.com", 1).unwrap();

        assert_eq!(
            state.appointments_for("priya@example.com", false).len(),
            active - 1
        );
        assert_eq!(
            state.appointments_for("priya@example.com", true).len(),
            active
        );
        let cancelled = state.appointments.iter().find(|a| a.id == 1).unwrap();
        assert_eq!(cancelled.status, APPOINT_STATUS_CANCELLED);
    }

    #[test]
    fn only_confirmed_appointments_can_be_cancelled() {
        let store = Store::new();
        let mut state = store.state().unwrap();

        // id 2 is seeded as completed
        assert!(state.cancel_appointment("priya@example.com", 2).is_err());
        state.cancel_appointment("priya@example.com", 1).unwrap();
        assert!(state.cancel_appointment("priya@example.com", 1).is_err());
        // someone else's appointment is invisible
        assert!(state.cancel_appointment("other@example.com", 1).is_err());
    }
}
