use serde::{Deserialize, Serialize};

use crate::form::FieldId;

pub const STEP_COUNT: usize = 3;

const PERSONAL_FIELDS: [FieldId; 10] = [
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
];

const EDUCATION_FIELDS: [FieldId; 8] = [
    FieldId::XBoard,
    FieldId::XYear,
    FieldId::XPercentage,
    FieldId::XMarksheet,
    FieldId::XiiBoard,
    FieldId::XiiYear,
    FieldId::XiiPercentage,
    FieldId::XiiMarksheet,
];

const EXTENDED_EDUCATION_FIELDS: [FieldId; 12] = [
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

const BANKING_FIELDS: [FieldId; 4] = [
    FieldId::AccountName,
    FieldId::AccountNumber,
    FieldId::ConfirmAccountNumber,
    FieldId::IfscCode,
];

/// Ordered fields shown on a wizard step.
///
/// Unknown indices yield an empty list.
pub fn step_fields(step_index: usize, extended_education: bool) -> &'static [FieldId] {
    match step_index {
        0 => &PERSONAL_FIELDS,
        1 if extended_education => &EXTENDED_EDUCATION_FIELDS,
        1 => &EDUCATION_FIELDS,
        2 => &BANKING_FIELDS,
        _ => &[],
    }
}

/// A details wizard step.
///
/// 详情向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Personal,
    Education,
    Banking,
}

impl WizardStep {
    pub const ALL: [WizardStep; STEP_COUNT] =
        [WizardStep::Personal, WizardStep::Education, WizardStep::Banking];

    pub fn index(self) -> usize {
        match self {
            WizardStep::Personal => 0,
            WizardStep::Education => 1,
            WizardStep::Banking => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        WizardStep::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal & Family Details",
            WizardStep::Education => "Education Details",
            WizardStep::Banking => "Bank Details",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn fields(self, extended_education: bool) -> &'static [FieldId] {
        step_fields(self.index(), extended_education)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_zero_lists_ten_personal_fields() {
        let fields = step_fields(0, false);
        assert_eq!(fields.len(), 10);
        assert_eq!(fields.first(), Some(&FieldId::FullName));
        assert_eq!(fields.last(), Some(&FieldId::AadhaarId));
        assert_eq!(step_fields(0, true), fields);
    }

    #[test]
    fn step_one_grows_with_extended_education() {
        let core = step_fields(1, false);
        let extended = step_fields(1, true);

        assert_eq!(core.len(), 8);
        assert_eq!(extended.len(), 12);
        assert_eq!(&extended[..8], core);
        assert!(extended[8..].iter().all(|f| f.is_higher_studies()));
    }

    #[test]
    fn step_two_lists_banking_fields() {
        assert_eq!(
            step_fields(2, false),
            &[
                FieldId::AccountName,
                FieldId::AccountNumber,
                FieldId::ConfirmAccountNumber,
                FieldId::IfscCode
            ]
        );
    }

    #[test]
    fn out_of_range_step_is_empty() {
        assert!(step_fields(3, false).is_empty());
        assert!(step_fields(usize::MAX, true).is_empty());
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in FieldId::ALL {
            let owners = (0..STEP_COUNT)
                .filter(|step| step_fields(*step, true).contains(&field))
                .count();
            assert_eq!(owners, 1, "{field}");
        }
    }

    #[test]
    fn step_neighbours() {
        assert_eq!(WizardStep::Personal.previous(), None);
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Education));
        assert_eq!(WizardStep::Banking.next(), None);
        assert!(WizardStep::Banking.is_last());
    }
}
