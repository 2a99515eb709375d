#[derive(Debug, Clone)]
pub struct DoctorData {
    pub did: u64,
    pub name: String,
    pub specialization: String,
    /// Weekday names the doctor takes bookings on.
    pub availability: Vec<String>,
    /// Bookable time-slot labels, e.g. "09:00 AM".
    pub slots: Vec<String>,
    pub hours: String,
    pub rating: f32,
    pub reviews: u32,
    pub patients: String,
    pub experience: String,
    pub is_available: bool,
    pub verified: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed practitioner catalog. Doctors are never created or removed at
/// runtime; the doctor-join flow only records applications for review.
pub fn catalog() -> Vec<DoctorData> {
    vec![
        DoctorData {
            did: 1,
            name: "Dr. Prakash Das".to_string(),
            specialization: "Psychologist".to_string(),
            availability: strings(&["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]),
            slots: strings(&[
                "08:30 AM", "09:00 AM", "09:30 AM", "10:00 AM", "02:00 PM", "02:30 PM",
                "03:00 PM", "07:00 PM",
            ]),
            hours: "08:30 AM-07:00 PM".to_string(),
            rating: 4.8,
            reviews: 132,
            patients: "5,000+".to_string(),
            experience: "15+ years".to_string(),
            is_available: true,
            verified: true,
        },
        DoctorData {
            did: 2,
            name: "Dr. Kumar Das".to_string(),
            specialization: "Ophthalmologist".to_string(),
            availability: strings(&["Monday", "Wednesday", "Friday", "Saturday"]),
            slots: strings(&[
                "09:00 AM", "10:00 AM", "11:00 AM", "03:00 PM", "04:00 PM", "05:00 PM",
            ]),
            hours: "09:00 AM-05:00 PM".to_string(),
            rating: 4.9,
            reviews: 96,
            patients: "3,200+".to_string(),
            experience: "12+ years".to_string(),
            is_available: true,
            verified: true,
        },
        // On leave; kept listed so the details screen can say so.
        DoctorData {
            did: 3,
            name: "Dr. Meera Nair".to_string(),
            specialization: "Cardiologist".to_string(),
            availability: strings(&["Tuesday", "Thursday"]),
            slots: strings(&["10:00 AM", "11:00 AM", "04:00 PM"]),
            hours: "10:00 AM-04:00 PM".to_string(),
            rating: 4.7,
            reviews: 58,
            patients: "2,000+".to_string(),
            experience: "10+ years".to_string(),
            is_available: false,
            verified: true,
        },
    ]
}
