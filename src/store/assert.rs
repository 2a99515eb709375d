use anyhow::bail;

use crate::models::doctors::DoctorData;
use crate::store::Store;

pub fn assert_doctor(store: &Store, did: u64) -> anyhow::Result<&DoctorData> {
    match store.doctors().iter().find(|d| d.did == did) {
        Some(doctor) => Ok(doctor),
        None => bail!("No such doctor"),
    }
}
