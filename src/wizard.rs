use anyhow::bail;
use rand::Rng;

use crate::models::appointments::{Appointment, APPOINT_STATUS_CONFIRMED};
use crate::models::doctors::DoctorData;
use crate::models::patients::PatientDetails;
use crate::validators::{classify_contact, require_field, ContactKind};

/// The booking flow as an explicit sum type. Each transition validates its
/// guard against the selected doctor and returns the next step, leaving
/// `self` untouched on failure so a rejected guard never loses progress.
///
/// `List -> Details -> Schedule -> PatientForm -> Confirmed -> List`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStep {
    List,
    Details { did: u64 },
    Schedule { did: u64 },
    PatientForm { did: u64, day: String, slot: String },
    Confirmed { appointment_id: u64 },
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::List
    }
}

impl BookingStep {
    pub fn name(&self) -> &'static str {
        match self {
            BookingStep::List => "list",
            BookingStep::Details { .. } => "details",
            BookingStep::Schedule { .. } => "schedule",
            BookingStep::PatientForm { .. } => "patient_form",
            BookingStep::Confirmed { .. } => "confirmed",
        }
    }

    pub fn doctor_id(&self) -> Option<u64> {
        match self {
            BookingStep::List | BookingStep::Confirmed { .. } => None,
            BookingStep::Details { did }
            | BookingStep::Schedule { did }
            | BookingStep::PatientForm { did, .. } => Some(*did),
        }
    }

    /// `List -> Details`. Catalog membership is the caller's guard (the
    /// store's doctor lookup); here only the step order is checked.
    pub fn select_doctor(&self, doctor: &DoctorData) -> anyhow::Result<BookingStep> {
        match self {
            BookingStep::List => Ok(BookingStep::Details { did: doctor.did }),
            _ => bail!("A booking is already in progress"),
        }
    }

    /// `Details -> Schedule`, blocked while the doctor is not taking
    /// appointments.
    pub fn proceed(&self, doctor: &DoctorData) -> anyhow::Result<BookingStep> {
        match self {
            BookingStep::Details { did } if *did == doctor.did => {
                if !doctor.is_available {
                    bail!("{} is not taking appointments right now", doctor.name);
                }
                Ok(BookingStep::Schedule { did: *did })
            }
            _ => bail!("No doctor selected"),
        }
    }

    /// `Schedule -> PatientForm`. Both a day and a slot must be chosen and
    /// must belong to the doctor's availability and slot lists.
    pub fn choose_schedule(
        &self,
        doctor: &DoctorData,
        day: &str,
        slot: &str,
    ) -> anyhow::Result<BookingStep> {
        match self {
            BookingStep::Schedule { did } if *did == doctor.did => {
                if day.is_empty() || slot.is_empty() {
                    bail!("Please select doctor, date, and time");
                }
                if !doctor.availability.iter().any(|d| d == day) {
                    bail!("{} is not available on {}", doctor.name, day);
                }
                if !doctor.slots.iter().any(|s| s == slot) {
                    bail!("{} has no {} slot", doctor.name, slot);
                }
                Ok(BookingStep::PatientForm {
                    did: *did,
                    day: day.to_string(),
                    slot: slot.to_string(),
                })
            }
            _ => bail!("Select a doctor before choosing a time"),
        }
    }

    /// `PatientForm -> Confirmed`. Required fields must be present and the
    /// mobile number must classify as a phone; produces the appointment to
    /// append, owned by `contact`.
    pub fn submit_patient(
        &self,
        doctor: &DoctorData,
        contact: &str,
        patient: PatientDetails,
        appointment_id: u64,
    ) -> anyhow::Result<(BookingStep, Appointment)> {
        match self {
            BookingStep::PatientForm { did, day, slot } if *did == doctor.did => {
                require_field(&patient.name, "Patient name")?;
                require_field(&patient.age, "Age")?;
                require_field(&patient.gender, "Gender")?;
                require_field(&patient.mobile, "Mobile number")?;
                if classify_contact(&patient.mobile) != ContactKind::Phone {
                    bail!("Please enter a valid 10-digit mobile number");
                }

                let appointment = Appointment {
                    id: appointment_id,
                    number: gen_appointment_number(),
                    contact: contact.to_string(),
                    did: *did,
                    doctor_name: doctor.name.clone(),
                    specialization: doctor.specialization.clone(),
                    date: day.clone(),
                    time: slot.clone(),
                    status: APPOINT_STATUS_CONFIRMED.to_string(),
                    patient: Some(patient),
                };
                Ok((BookingStep::Confirmed { appointment_id }, appointment))
            }
            _ => bail!("Choose a day and time before entering patient details"),
        }
    }

    /// `Confirmed -> List`, clearing all transient selection state.
    pub fn finish(&self) -> anyhow::Result<BookingStep> {
        match self {
            BookingStep::Confirmed { .. } => Ok(BookingStep::List),
            _ => bail!("No confirmed booking to finish"),
        }
    }

    /// Abandon the flow from any intermediate step (the Back buttons, or a
    /// navigate-away). A confirmed booking must be finished instead.
    pub fn back(&self) -> anyhow::Result<BookingStep> {
        match self {
            BookingStep::Confirmed { .. } => bail!("Booking already confirmed"),
            _ => Ok(BookingStep::List),
        }
    }
}

/// Display label from the prototype: `#1`..`#1000`, deliberately not unique.
pub fn gen_appointment_number() -> String {
    format!("#{}", rand::thread_rng().gen_range(1..=1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::doctors::catalog;

    fn patient() -> PatientDetails {
        PatientDetails {
            name: "Asha".to_string(),
            age: "30".to_string(),
            gender: "Female".to_string(),
            mobile: "9876543210".to_string(),
            weight: "62".to_string(),
            problem: "Recurring headaches".to_string(),
            relationship: "Self".to_string(),
        }
    }

    #[test]
    fn full_walk_produces_a_confirmed_appointment() {
        let doctors = catalog();
        let doctor = &doctors[0];
        assert_eq!(doctor.did, 1);

        let step = BookingStep::default();
        let step = step.select_doctor(doctor).unwrap();
        let step = step.proceed(doctor).unwrap();
        let step = step.choose_schedule(doctor, "Monday", "09:00 AM").unwrap();
        let (step, appointment) = step
            .submit_patient(doctor, "asha@example.com", patient(), 7)
            .unwrap();

        assert_eq!(step, BookingStep::Confirmed { appointment_id: 7 });
        assert_eq!(appointment.id, 7);
        assert_eq!(appointment.doctor_name, "Dr. Prakash Das");
        assert_eq!(appointment.date, "Monday");
        assert_eq!(appointment.time, "09:00 AM");
        assert_eq!(appointment.status, APPOINT_STATUS_CONFIRMED);
        assert!(!appointment.number.is_empty());
        assert_eq!(appointment.patient.as_ref().unwrap().name, "Asha");

        assert_eq!(step.finish().unwrap(), BookingStep::List);
    }

    #[test]
    fn schedule_requires_both_day_and_slot() {
        let doctors = catalog();
        let doctor = &doctors[0];
        let step = BookingStep::Schedule { did: doctor.did };

        assert!(step.choose_schedule(doctor, "", "09:00 AM").is_err());
        assert!(step.choose_schedule(doctor, "Monday", "").is_err());
    }

    #[test]
    fn schedule_rejects_days_and_slots_the_doctor_does_not_offer() {
        let doctors = catalog();
        let doctor = &doctors[0];
        let step = BookingStep::Schedule { did: doctor.did };

        let err = step.choose_schedule(doctor, "Sunday", "09:00 AM").unwrap_err();
        assert!(err.to_string().contains("Sunday"));
        assert!(step.choose_schedule(doctor, "Monday", "11:11 PM").is_err());
    }

    #[test]
    fn unavailable_doctor_blocks_the_details_transition() {
        let doctors = catalog();
        let on_leave = doctors.iter().find(|d| !d.is_available).unwrap();

        let step = BookingStep::List.select_doctor(on_leave).unwrap();
        let err = step.proceed(on_leave).unwrap_err();
        assert!(err.to_string().contains("not taking appointments"));
    }

    #[test]
    fn patient_form_requires_the_mandatory_fields() {
        let doctors = catalog();
        let doctor = &doctors[0];
        let step = BookingStep::PatientForm {
            did: doctor.did,
            day: "Monday".to_string(),
            slot: "09:00 AM".to_string(),
        };

        let mut missing_name = patient();
        missing_name.name = String::new();
        let err = step
            .submit_patient(doctor, "a@b.com", missing_name, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "Patient name is required");

        let mut bad_mobile = patient();
        bad_mobile.mobile = "12345".to_string();
        assert!(step.submit_patient(doctor, "a@b.com", bad_mobile, 1).is_err());
    }

    #[test]
    fn transitions_out_of_order_are_rejected() {
        let doctors = catalog();
        let doctor = &doctors[0];

        assert!(BookingStep::List.proceed(doctor).is_err());
        assert!(BookingStep::List
            .choose_schedule(doctor, "Monday", "09:00 AM")
            .is_err());
        assert!(BookingStep::List
            .submit_patient(doctor, "a@b.com", patient(), 1)
            .is_err());
        assert!(BookingStep::List.finish().is_err());
        assert!(BookingStep::Details { did: doctor.did }
            .select_doctor(doctor)
            .is_err());
    }

    #[test]
    fn back_abandons_intermediate_steps_only() {
        let doctors = catalog();
        let doctor = &doctors[0];

        let step = BookingStep::List.select_doctor(doctor).unwrap();
        assert_eq!(step.back().unwrap(), BookingStep::List);
        assert_eq!(BookingStep::List.back().unwrap(), BookingStep::List);
        assert!(BookingStep::Confirmed { appointment_id: 1 }.back().is_err());
    }

    #[test]
    fn appointment_numbers_stay_in_display_range() {
        for _ in 0..50 {
            let number = gen_appointment_number();
            let n: u32 = number.trim_start_matches('#').parse().unwrap();
            assert!((1..=1000).contains(&n));
        }
    }
}
