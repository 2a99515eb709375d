use anyhow::bail;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;

pub const RESEND_COOLDOWN_SECS: i64 = 60;
pub const CODE_TTL_SECS: i64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OtpState {
    Issued,
    Verified,
}

/// One-time-code state machine for a single contact:
/// `Issued -> Verified`, with resend re-entering `Issued` under a new code.
///
/// The code never leaves this struct except through `verify` comparison;
/// delivery is the caller's concern and must stay out-of-band. Timing is
/// injected so expiry and cooldown are testable without a clock.
#[derive(Debug, Clone)]
pub struct OtpSession {
    contact: String,
    code: String,
    issued_at: NaiveDateTime,
    state: OtpState,
}

fn gen_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

impl OtpSession {
    pub fn issue(contact: &str, now: NaiveDateTime) -> Self {
        Self {
            contact: contact.to_string(),
            code: gen_code(),
            issued_at: now,
            state: OtpState::Issued,
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Succeeds iff `input` is exactly 6 digits, matches the current code
    /// and the validity window has not elapsed. The mismatch error is
    /// deliberately generic; there is no attempt counter or lockout.
    pub fn verify(&mut self, input: &str, now: NaiveDateTime) -> anyhow::Result<()> {
        if input.len() != 6 || !input.chars().all(|c| c.is_ascii_digit()) {
            bail!("Please enter a valid 6-digit OTP");
        }
        if self.state == OtpState::Verified {
            bail!("OTP already used");
        }
        if now.signed_duration_since(self.issued_at) > Duration::seconds(CODE_TTL_SECS) {
            bail!("OTP has expired, please request a new one");
        }
        if input != self.code {
            bail!("Invalid OTP");
        }
        self.state = OtpState::Verified;
        Ok(())
    }

    /// Re-issues under a fresh code, invalidating the previous one. Only
    /// permitted once the resend cooldown has run out.
    pub fn resend(&mut self, now: NaiveDateTime) -> anyhow::Result<()> {
        let waited = now.signed_duration_since(self.issued_at).num_seconds();
        if waited < RESEND_COOLDOWN_SECS {
            bail!(
                "Please wait {}s before requesting another OTP",
                RESEND_COOLDOWN_SECS - waited
            );
        }
        self.code = gen_code();
        self.issued_at = now;
        self.state = OtpState::Issued;
        Ok(())
    }
}
