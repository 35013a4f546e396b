use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a details-wizard field.
///
/// The set is closed: every [`FormRecord`](super::FormRecord) carries a value
/// for each variant for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    // Personal & family details
    FullName,
    Email,
    Phone,
    FatherName,
    MotherName,
    Address,
    Occupation,
    Income,
    PanId,
    AadhaarId,

    // Bank details
    AccountName,
    AccountNumber,
    ConfirmAccountNumber,
    IfscCode,

    // Education details
    XBoard,
    XYear,
    XPercentage,
    XMarksheet,
    XiiBoard,
    XiiYear,
    XiiPercentage,
    XiiMarksheet,
    CollegeName,
    CollegeYear,
    CollegePercentage,
    CollegeMarksheet,
}

impl FieldId {
    pub const COUNT: usize = 26;

    /// All fields in declaration order.
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::FatherName,
        FieldId::MotherName,
        FieldId::Address,
        FieldId::Occupation,
        FieldId::Income,
        FieldId::PanId,
        FieldId::AadhaarId,
        FieldId::AccountName,
        FieldId::AccountNumber,
        FieldId::ConfirmAccountNumber,
        FieldId::IfscCode,
        FieldId::XBoard,
        FieldId::XYear,
        FieldId::XPercentage,
        FieldId::XMarksheet,
        FieldId::XiiBoard,
        FieldId::XiiYear,
        FieldId::XiiPercentage,
        FieldId::XiiMarksheet,
        FieldId::CollegeName,
        FieldId::CollegeYear,
        FieldId::CollegePercentage,
        FieldId::CollegeMarksheet,
    ];

    /// Position of the field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the field (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::FatherName => "fatherName",
            FieldId::MotherName => "motherName",
            FieldId::Address => "address",
            FieldId::Occupation => "occupation",
            FieldId::Income => "income",
            FieldId::PanId => "panId",
            FieldId::AadhaarId => "aadhaarId",
            FieldId::AccountName => "accountName",
            FieldId::AccountNumber => "accountNumber",
            FieldId::ConfirmAccountNumber => "confirmAccountNumber",
            FieldId::IfscCode => "ifscCode",
            FieldId::XBoard => "xBoard",
            FieldId::XYear => "xYear",
            FieldId::XPercentage => "xPercentage",
            FieldId::XMarksheet => "xMarksheet",
            FieldId::XiiBoard => "xiiBoard",
            FieldId::XiiYear => "xiiYear",
            FieldId::XiiPercentage => "xiiPercentage",
            FieldId::XiiMarksheet => "xiiMarksheet",
            FieldId::CollegeName => "collegeName",
            FieldId::CollegeYear => "collegeYear",
            FieldId::CollegePercentage => "collegePercentage",
            FieldId::CollegeMarksheet => "collegeMarksheet",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::FatherName => "Father's Name",
            FieldId::MotherName => "Mother's Name",
            FieldId::Address => "Address",
            FieldId::Occupation => "Occupation",
            FieldId::Income => "Annual Income",
            FieldId::PanId => "PAN Number",
            FieldId::AadhaarId => "Aadhaar Number",
            FieldId::AccountName => "Account Holder Name",
            FieldId::AccountNumber => "Account Number",
            FieldId::ConfirmAccountNumber => "Confirm Account Number",
            FieldId::IfscCode => "IFSC Code",
            FieldId::XBoard => "X Board",
            FieldId::XYear => "X Year",
            FieldId::XPercentage => "X Percentage",
            FieldId::XMarksheet => "X Marksheet",
            FieldId::XiiBoard => "XII Board",
            FieldId::XiiYear => "XII Year",
            FieldId::XiiPercentage => "XII Percentage",
            FieldId::XiiMarksheet => "XII Marksheet",
            FieldId::CollegeName => "College Name",
            FieldId::CollegeYear => "Passing Year",
            FieldId::CollegePercentage => "Percentage",
            FieldId::CollegeMarksheet => "College Marksheet",
        }
    }

    /// Whether the field holds a document reference instead of text.
    pub fn is_file(self) -> bool {
        matches!(
            self,
            FieldId::XMarksheet | FieldId::XiiMarksheet | FieldId::CollegeMarksheet
        )
    }

    /// Higher-studies fields: displayed when the flag is on, never required.
    pub fn is_higher_studies(self) -> bool {
        matches!(
            self,
            FieldId::CollegeName
                | FieldId::CollegeYear
                | FieldId::CollegePercentage
                | FieldId::CollegeMarksheet
        )
    }

    /// Whether an empty value is reported as "required".
    pub fn is_required(self) -> bool {
        !self.is_higher_studies()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for FieldId {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
