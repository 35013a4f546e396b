//! Registration state machine.
//!
//! Defines a pure state transition function for the registration gate:
//! details entry, OTP issuance, OTP confirmation and credential entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::UserProfile;

use super::otp::{OtpChannel, OtpTicket};
use super::session::{RegistrationField, RegistrationSession, INVALID_OTP};

/// Registration flow phase.
///
/// 注册流程阶段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPhase {
    /// Name, email and phone entry.
    ///
    /// 填写姓名、邮箱与手机号。
    #[default]
    Details,
    /// An OTP was issued and awaits confirmation.
    ///
    /// 验证码已发送，等待确认。
    OtpIssued { ticket: OtpTicket },
    /// OTP confirmed; credentials may be entered and submitted.
    ///
    /// 验证码已确认，可以填写密码并提交。
    OtpVerified,
    /// Profile persisted; login takes over.
    ///
    /// 资料已保存，交由登录页处理。
    Ready,
}

/// Events that drive the registration flow.
///
/// 驱动注册流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationEvent {
    /// An input changed.
    ///
    /// 输入框内容变化。
    SetField {
        field: RegistrationField,
        value: String,
    },
    /// "Send OTP" pressed.
    ///
    /// 点击“发送验证码”。
    RequestOtp,
    /// The OTP service issued a code (service callback).
    ///
    /// 验证码服务已发码（服务回调）。
    OtpIssued { ticket: OtpTicket },
    /// The OTP service could not issue a code (service callback).
    ///
    /// 验证码服务发码失败（服务回调）。
    OtpIssueFailed { reason: String },
    /// "Verify OTP" pressed.
    ///
    /// 点击“验证”。
    SubmitOtp,
    /// The OTP service accepted the code.
    ///
    /// 验证码校验通过。
    OtpAccepted,
    /// The OTP service rejected the code.
    ///
    /// 验证码校验失败。
    OtpRejected,
    /// "Register" pressed.
    ///
    /// 点击“注册”。
    Submit,
    /// The profile was written to storage.
    ///
    /// 资料已写入存储。
    ProfilePersisted,
}

impl RegistrationEvent {
    /// Variant name, safe to log (no field values).
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationEvent::SetField { .. } => "SetField",
            RegistrationEvent::RequestOtp => "RequestOtp",
            RegistrationEvent::OtpIssued { .. } => "OtpIssued",
            RegistrationEvent::OtpIssueFailed { .. } => "OtpIssueFailed",
            RegistrationEvent::SubmitOtp => "SubmitOtp",
            RegistrationEvent::OtpAccepted => "OtpAccepted",
            RegistrationEvent::OtpRejected => "OtpRejected",
            RegistrationEvent::Submit => "Submit",
            RegistrationEvent::ProfilePersisted => "ProfilePersisted",
        }
    }
}

/// Side-effects produced by registration transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationAction {
    /// Ask the OTP service for a code.
    ///
    /// 请求验证码。
    IssueOtp { channel: OtpChannel },
    /// Check the entered code against an issued ticket.
    ///
    /// 校验输入的验证码。
    VerifyOtp { ticket_id: Uuid, code: String },
    /// Persist the carry-over profile.
    ///
    /// 保存用户资料。
    PersistProfile { profile: UserProfile },
    /// Navigate to login.
    ///
    /// 跳转到登录页。
    HandOffToLogin,
}

/// Pure registration state machine.
///
/// 纯状态机：不包含副作用。
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        mut session: RegistrationSession,
        event: RegistrationEvent,
    ) -> (RegistrationSession, Vec<RegistrationAction>) {
        match (&session.phase, event) {
            (RegistrationPhase::Ready, _) => (session, Vec::new()),
            (_, RegistrationEvent::SetField { field, value }) => {
                session.form.set(field, value);
                (session, Vec::new())
            }
            (RegistrationPhase::Details, RegistrationEvent::RequestOtp) => {
                match session.form.otp_channel() {
                    Some(channel) => (session, vec![RegistrationAction::IssueOtp { channel }]),
                    None => (session, Vec::new()),
                }
            }
            (RegistrationPhase::Details, RegistrationEvent::OtpIssued { ticket }) => {
                session.errors.remove(RegistrationField::Otp);
                session.phase = RegistrationPhase::OtpIssued { ticket };
                (session, Vec::new())
            }
            (RegistrationPhase::Details, RegistrationEvent::OtpIssueFailed { reason }) => {
                session.errors.insert(RegistrationField::Otp, reason);
                (session, Vec::new())
            }
            (RegistrationPhase::OtpIssued { ticket }, RegistrationEvent::SubmitOtp) => {
                let action = RegistrationAction::VerifyOtp {
                    ticket_id: ticket.id,
                    code: session.form.otp.clone(),
                };
                (session, vec![action])
            }
            (RegistrationPhase::OtpIssued { .. }, RegistrationEvent::OtpAccepted) => {
                session.errors.remove(RegistrationField::Otp);
                session.phase = RegistrationPhase::OtpVerified;
                (session, Vec::new())
            }
            (RegistrationPhase::OtpIssued { .. }, RegistrationEvent::OtpRejected) => {
                session.errors.insert(RegistrationField::Otp, INVALID_OTP);
                (session, Vec::new())
            }
            (RegistrationPhase::OtpVerified, RegistrationEvent::Submit) => {
                session.errors = session.form.validate();
                if !session.errors.is_empty() {
                    return (session, Vec::new());
                }
                let profile = session.form.profile();
                (session, vec![RegistrationAction::PersistProfile { profile }])
            }
            (RegistrationPhase::OtpVerified, RegistrationEvent::ProfilePersisted) => {
                session.phase = RegistrationPhase::Ready;
                (session, vec![RegistrationAction::HandOffToLogin])
            }
            (_, _event) => (session, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::DEMO_OTP_CODE;
    use crate::registration::session::{NAME_REQUIRED, PASSWORD_MISMATCH};

    fn set(field: RegistrationField, value: &str) -> RegistrationEvent {
        RegistrationEvent::SetField {
            field,
            value: value.to_string(),
        }
    }

    fn run(
        session: RegistrationSession,
        events: impl IntoIterator<Item = RegistrationEvent>,
    ) -> (RegistrationSession, Vec<RegistrationAction>) {
        let mut session = session;
        let mut actions = Vec::new();
        for event in events {
            let (next, mut emitted) = RegistrationStateMachine::transition(session, event);
            session = next;
            actions.append(&mut emitted);
        }
        (session, actions)
    }

    fn ticket() -> OtpTicket {
        OtpTicket {
            id: Uuid::new_v4(),
            channel: OtpChannel {
                email: "asha@example.com".into(),
                phone: "9876543210".into(),
            },
            demo_code: Some(DEMO_OTP_CODE.to_string()),
        }
    }

    fn issued_session() -> (RegistrationSession, OtpTicket) {
        let ticket = ticket();
        let (session, _) = run(
            RegistrationSession::new(),
            [
                set(RegistrationField::Name, "Asha"),
                set(RegistrationField::Email, "asha@example.com"),
                set(RegistrationField::Phone, "9876543210"),
                RegistrationEvent::OtpIssued {
                    ticket: ticket.clone(),
                },
            ],
        );
        (session, ticket)
    }

    #[test]
    fn registration_state_machine_request_otp_without_contacts_is_ignored() {
        let (session, actions) = run(
            RegistrationSession::new(),
            [set(RegistrationField::Email, "asha@example.com"), RegistrationEvent::RequestOtp],
        );
        assert_eq!(session.phase, RegistrationPhase::Details);
        assert!(actions.is_empty());
        assert!(!session.otp_sent());
    }

    #[test]
    fn registration_state_machine_request_otp_skips_format_checks() {
        let (session, actions) = run(
            RegistrationSession::new(),
            [
                set(RegistrationField::Email, "x"),
                set(RegistrationField::Phone, "1"),
                RegistrationEvent::RequestOtp,
            ],
        );
        assert_eq!(session.phase, RegistrationPhase::Details);
        assert_eq!(
            actions,
            vec![RegistrationAction::IssueOtp {
                channel: OtpChannel {
                    email: "x".into(),
                    phone: "1".into()
                }
            }]
        );
    }

    #[test]
    fn registration_state_machine_issued_ticket_moves_to_otp_issued() {
        let (session, ticket) = issued_session();
        assert_eq!(session.phase, RegistrationPhase::OtpIssued { ticket });
        assert!(session.otp_sent());
        assert!(!session.otp_verified());
    }

    #[test]
    fn registration_state_machine_issue_failure_is_reported_on_otp_field() {
        let (session, _) = run(
            RegistrationSession::new(),
            [RegistrationEvent::OtpIssueFailed {
                reason: "service unavailable".into(),
            }],
        );
        assert_eq!(session.phase, RegistrationPhase::Details);
        assert_eq!(
            session.errors.get(RegistrationField::Otp),
            Some("service unavailable")
        );
    }

    #[test]
    fn registration_state_machine_submit_otp_asks_for_verification() {
        let (session, ticket) = issued_session();
        let (session, actions) = run(
            session,
            [set(RegistrationField::Otp, "654321"), RegistrationEvent::SubmitOtp],
        );
        assert_eq!(
            actions,
            vec![RegistrationAction::VerifyOtp {
                ticket_id: ticket.id,
                code: "654321".into()
            }]
        );
        assert!(matches!(session.phase, RegistrationPhase::OtpIssued { .. }));
    }

    #[test]
    fn registration_state_machine_rejected_otp_stays_with_error() {
        let (session, _) = issued_session();
        let (session, actions) = run(session, [RegistrationEvent::OtpRejected]);
        assert!(matches!(session.phase, RegistrationPhase::OtpIssued { .. }));
        assert_eq!(session.errors.get(RegistrationField::Otp), Some(INVALID_OTP));
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_accepted_otp_verifies_once() {
        let (session, _) = issued_session();
        let (session, _) = run(
            session,
            [RegistrationEvent::OtpRejected, RegistrationEvent::OtpAccepted],
        );
        assert_eq!(session.phase, RegistrationPhase::OtpVerified);
        assert!(!session.errors.contains(RegistrationField::Otp));

        let (session, actions) = run(
            session,
            [RegistrationEvent::SubmitOtp, RegistrationEvent::OtpRejected],
        );
        assert_eq!(session.phase, RegistrationPhase::OtpVerified);
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_submit_before_verification_is_ignored() {
        let (session, actions) = run(RegistrationSession::new(), [RegistrationEvent::Submit]);
        assert_eq!(session.phase, RegistrationPhase::Details);
        assert!(session.errors.is_empty());
        assert!(actions.is_empty());

        let (session, _) = issued_session();
        let (session, actions) = run(session, [RegistrationEvent::Submit]);
        assert!(matches!(session.phase, RegistrationPhase::OtpIssued { .. }));
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_invalid_submit_reports_errors() {
        let (session, _) = issued_session();
        let (session, actions) = run(
            session,
            [
                RegistrationEvent::OtpAccepted,
                set(RegistrationField::Name, "  "),
                set(RegistrationField::Password, "secret"),
                set(RegistrationField::ConfirmPassword, "secreT"),
                RegistrationEvent::Submit,
            ],
        );
        assert_eq!(session.phase, RegistrationPhase::OtpVerified);
        assert!(actions.is_empty());
        assert_eq!(session.errors.get(RegistrationField::Name), Some(NAME_REQUIRED));
        assert_eq!(
            session.errors.get(RegistrationField::ConfirmPassword),
            Some(PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn registration_state_machine_valid_submit_persists_then_hands_off() {
        let (session, _) = issued_session();
        let (session, actions) = run(
            session,
            [
                RegistrationEvent::OtpAccepted,
                set(RegistrationField::Password, "secret"),
                set(RegistrationField::ConfirmPassword, "secret"),
                RegistrationEvent::Submit,
            ],
        );
        assert_eq!(session.phase, RegistrationPhase::OtpVerified);
        assert_eq!(
            actions,
            vec![RegistrationAction::PersistProfile {
                profile: UserProfile::new("Asha", "asha@example.com", "9876543210")
            }]
        );

        let (session, actions) = run(session, [RegistrationEvent::ProfilePersisted]);
        assert_eq!(session.phase, RegistrationPhase::Ready);
        assert_eq!(actions, vec![RegistrationAction::HandOffToLogin]);
    }

    #[test]
    fn registration_state_machine_ready_is_terminal() {
        let session = RegistrationSession {
            phase: RegistrationPhase::Ready,
            ..RegistrationSession::default()
        };
        for event in [
            set(RegistrationField::Name, "late"),
            RegistrationEvent::RequestOtp,
            RegistrationEvent::Submit,
            RegistrationEvent::ProfilePersisted,
        ] {
            let (next, actions) = RegistrationStateMachine::transition(session.clone(), event);
            assert_eq!(next, session);
            assert!(actions.is_empty());
        }
    }
}
