use crate::form::{ErrorMap, FieldId, FieldValue, FormError, FormRecord};
use crate::profile::UserProfile;

use super::state_machine::WizardState;
use super::steps::step_fields;

/// Holds everything the details wizard knows: the record, the current
/// errors, the current step and the higher-studies flag.
///
/// The step only changes through [`StepNavigator`](super::StepNavigator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    record: FormRecord,
    errors: ErrorMap<FieldId>,
    state: WizardState,
    extended_education: bool,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap<FieldId> {
        &self.errors
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Index of the current step, `None` once complete.
    pub fn step_index(&self) -> Option<usize> {
        self.state.step().map(|step| step.index())
    }

    pub fn extended_education(&self) -> bool {
        self.extended_education
    }

    /// Fields displayed on the current step.
    pub fn visible_fields(&self) -> &'static [FieldId] {
        match self.step_index() {
            Some(index) => step_fields(index, self.extended_education),
            None => &[],
        }
    }

    /// Update a field and drop its error so a correction shows immediately.
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        self.record.set(field, value)?;
        self.errors.remove(field);
        Ok(())
    }

    pub fn set_extended_education(&mut self, enabled: bool) {
        self.extended_education = enabled;
    }

    /// Copy the registration carry-over fields into the record.
    ///
    /// Only `fullName`, `email` and `phone` are touched, and only while they are
    /// still empty. Returns the fields that were filled.
    pub fn prefill(&mut self, profile: &UserProfile) -> Vec<FieldId> {
        let carried = [
            (FieldId::FullName, profile.full_name.as_str()),
            (FieldId::Email, profile.email.as_str()),
            (FieldId::Phone, profile.phone.as_str()),
        ];

        let mut filled = Vec::new();
        for (field, value) in carried {
            if value.is_empty() || !self.record.is_empty(field) {
                continue;
            }
            if self.record.set(field, FieldValue::from(value)).is_ok() {
                filled.push(field);
            }
        }
        filled
    }

    pub(crate) fn replace_errors(&mut self, errors: ErrorMap<FieldId>) {
        self.errors = errors;
    }

    pub(crate) fn set_state(&mut self, state: WizardState) {
        self.state = state;
    }
}
