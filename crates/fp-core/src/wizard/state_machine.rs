//! Details wizard state machine.
//!
//! Defines a pure state transition function for the three-step details flow.

use serde::{Deserialize, Serialize};

use super::steps::WizardStep;

/// Wizard flow state.
///
/// 向导流程状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    /// Editing one of the steps.
    ///
    /// 正在填写某一步。
    Step(WizardStep),
    /// All steps validated; payment takes over.
    ///
    /// 全部步骤已通过校验，交由支付页处理。
    Complete,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Step(WizardStep::Personal)
    }
}

impl WizardState {
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            WizardState::Step(step) => Some(*step),
            WizardState::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, WizardState::Complete)
    }
}

/// Events that drive the wizard.
///
/// 驱动向导的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// "Next" pressed; carries the outcome of validating the current step.
    ///
    /// 点击“下一步”，携带当前步骤的校验结果。
    Next { step_valid: bool },
    /// "Back" pressed.
    ///
    /// 点击“返回”。
    Back,
}

/// Side-effects produced by wizard transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Hand the collected record off to the payment view.
    ///
    /// 将表单交给支付页。
    HandOffToPayment,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Step(step), WizardEvent::Next { step_valid: true }) => match step.next() {
                Some(next) => (WizardState::Step(next), Vec::new()),
                None => (WizardState::Complete, vec![WizardAction::HandOffToPayment]),
            },
            (WizardState::Step(step), WizardEvent::Next { step_valid: false }) => {
                (WizardState::Step(step), Vec::new())
            }
            (WizardState::Step(step), WizardEvent::Back) => match step.previous() {
                Some(previous) => (WizardState::Step(previous), Vec::new()),
                None => (WizardState::Step(step), Vec::new()),
            },
            (state, _event) => (state, Vec::new()),
        }
    }
}
