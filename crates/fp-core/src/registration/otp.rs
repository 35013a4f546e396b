use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Code issued by the simulated OTP service.
pub const DEMO_OTP_CODE: &str = "123456";

/// Contact channel the OTP is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChannel {
    pub email: String,
    pub phone: String,
}

/// Handle for one OTP issuance.
///
/// `demo_code` is the out-of-band copy of the code that simulated services
/// surface to the user; real services leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpTicket {
    pub id: Uuid,
    pub channel: OtpChannel,
    pub demo_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpVerification {
    Accepted,
    Rejected,
}
