use serde::{Deserialize, Serialize};

use crate::validation::validate_fields;

use super::state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
use super::store::FormStore;

/// User intent on the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardCommand {
    Next,
    Back,
}

/// Drives [`WizardStateMachine`] against a [`FormStore`].
///
/// `Next` validates the current step's fields and replaces the error map
/// wholesale before the transition; `Back` never validates.
pub struct StepNavigator;

impl StepNavigator {
    pub fn dispatch(store: &mut FormStore, command: WizardCommand) -> (WizardState, Vec<WizardAction>) {
        let current = store.state();
        if current.is_complete() {
            return (current, Vec::new());
        }

        let event = match command {
            WizardCommand::Next => {
                let errors = validate_fields(store.visible_fields(), store.record());
                let step_valid = errors.is_empty();
                #[cfg(feature = "tracing")]
                if !step_valid {
                    tracing::debug!(
                        step = ?current,
                        invalid_fields = errors.len(),
                        "wizard step validation failed"
                    );
                }
                store.replace_errors(errors);
                WizardEvent::Next { step_valid }
            }
            WizardCommand::Back => WizardEvent::Back,
        };

        let (next, actions) = WizardStateMachine::transition(current, event);
        store.set_state(next);
        (next, actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldId, FileRef};
    use crate::validation::{ACCOUNT_MISMATCH, REQUIRED};
    use crate::wizard::{step_fields, WizardStep};

    fn fill_personal(store: &mut FormStore) {
        let values = [
            (FieldId::FullName, "Asha Rao"),
            (FieldId::Email, "asha@example.com"),
            (FieldId::Phone, "9876543210"),
            (FieldId::FatherName, "Ravi Rao"),
            (FieldId::MotherName, "Meera Rao"),
            (FieldId::Address, "12 MG Road"),
            (FieldId::Occupation, "Engineer"),
            (FieldId::Income, "900000"),
            (FieldId::PanId, "ABCDE1234F"),
            (FieldId::AadhaarId, "123456789012"),
        ];
        for (field, value) in values {
            store.set_field(field, value.into()).unwrap();
        }
    }

    fn fill_education(store: &mut FormStore) {
        let values = [
            (FieldId::XBoard, "CBSE"),
            (FieldId::XYear, "2012"),
            (FieldId::XPercentage, "91"),
            (FieldId::XiiBoard, "CBSE"),
            (FieldId::XiiYear, "2014"),
            (FieldId::XiiPercentage, "88"),
        ];
        for (field, value) in values {
            store.set_field(field, value.into()).unwrap();
        }
        store
            .set_field(FieldId::XMarksheet, FileRef::new("x.pdf").into())
            .unwrap();
        store
            .set_field(FieldId::XiiMarksheet, FileRef::new("xii.pdf").into())
            .unwrap();
    }

    fn fill_banking(store: &mut FormStore) {
        let values = [
            (FieldId::AccountName, "Asha Rao"),
            (FieldId::AccountNumber, "001122334455"),
            (FieldId::ConfirmAccountNumber, "001122334455"),
            (FieldId::IfscCode, "SBIN0001234"),
        ];
        for (field, value) in values {
            store.set_field(field, value.into()).unwrap();
        }
    }

    #[test]
    fn next_with_empty_step_reports_exactly_the_required_fields() {
        let mut store = FormStore::new();

        let (state, actions) = StepNavigator::dispatch(&mut store, WizardCommand::Next);

        assert_eq!(state, WizardState::Step(WizardStep::Personal));
        assert!(actions.is_empty());
        let reported: Vec<_> = store.errors().keys().collect();
        let mut expected = step_fields(0, false).to_vec();
        expected.sort();
        assert_eq!(reported, expected);
        assert!(store.errors().iter().all(|(_, msg)| msg == REQUIRED));
    }

    #[test]
    fn next_with_valid_step_advances_and_clears_errors() {
        let mut store = FormStore::new();
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        fill_personal(&mut store);

        let (state, _) = StepNavigator::dispatch(&mut store, WizardCommand::Next);

        assert_eq!(state, WizardState::Step(WizardStep::Education));
        assert_eq!(store.step_index(), Some(1));
        assert!(store.errors().is_empty());
    }

    #[test]
    fn error_map_never_keeps_entries_from_other_steps() {
        let mut store = FormStore::new();
        fill_personal(&mut store);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);

        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        assert!(store.errors().keys().all(|f| step_fields(1, false).contains(&f)));

        StepNavigator::dispatch(&mut store, WizardCommand::Back);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        assert!(store.errors().keys().all(|f| step_fields(1, false).contains(&f)));
    }

    #[test]
    fn extended_education_fields_never_block_next() {
        let mut store = FormStore::new();
        fill_personal(&mut store);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        store.set_extended_education(true);
        fill_education(&mut store);

        let (state, _) = StepNavigator::dispatch(&mut store, WizardCommand::Next);

        assert_eq!(state, WizardState::Step(WizardStep::Banking));
        assert!(!store.errors().contains(FieldId::CollegeName));
        assert!(!store.errors().contains(FieldId::CollegeMarksheet));
    }

    #[test]
    fn back_never_validates_and_keeps_values() {
        let mut store = FormStore::new();
        fill_personal(&mut store);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        let errors_before = store.errors().clone();
        assert!(!errors_before.is_empty());

        let (state, actions) = StepNavigator::dispatch(&mut store, WizardCommand::Back);

        assert_eq!(state, WizardState::Step(WizardStep::Personal));
        assert!(actions.is_empty());
        assert_eq!(store.errors(), &errors_before);
        assert_eq!(store.record().text(FieldId::PanId), "ABCDE1234F");
    }

    #[test]
    fn back_on_first_step_is_a_no_op() {
        let mut store = FormStore::new();
        let (state, _) = StepNavigator::dispatch(&mut store, WizardCommand::Back);
        assert_eq!(state, WizardState::Step(WizardStep::Personal));
        assert!(store.errors().is_empty());
    }

    #[test]
    fn mismatched_account_blocks_completion() {
        let mut store = FormStore::new();
        fill_personal(&mut store);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        fill_education(&mut store);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        fill_banking(&mut store);
        store
            .set_field(FieldId::ConfirmAccountNumber, "001122334456".into())
            .unwrap();

        let (state, actions) = StepNavigator::dispatch(&mut store, WizardCommand::Next);

        assert_eq!(state, WizardState::Step(WizardStep::Banking));
        assert!(actions.is_empty());
        assert_eq!(store.errors().get(FieldId::ConfirmAccountNumber), Some(ACCOUNT_MISMATCH));
    }

    #[test]
    fn full_walk_completes_and_hands_off_once() {
        let mut store = FormStore::new();
        fill_personal(&mut store);
        fill_education(&mut store);
        fill_banking(&mut store);

        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        StepNavigator::dispatch(&mut store, WizardCommand::Next);
        let (state, actions) = StepNavigator::dispatch(&mut store, WizardCommand::Next);

        assert_eq!(state, WizardState::Complete);
        assert_eq!(actions, vec![WizardAction::HandOffToPayment]);
        assert_eq!(store.step_index(), None);

        let (state, actions) = StepNavigator::dispatch(&mut store, WizardCommand::Next);
        assert_eq!(state, WizardState::Complete);
        assert!(actions.is_empty());
        let (state, _) = StepNavigator::dispatch(&mut store, WizardCommand::Back);
        assert_eq!(state, WizardState::Complete);
    }
}
