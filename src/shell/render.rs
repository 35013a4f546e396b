//! Plain-text rendering of the views.

use std::fmt::Write;

use fp_core::chat::{ChatAuthor, ChatLog};
use fp_core::payment::PaymentField;
use fp_core::registration::RegistrationField;
use fp_core::{FieldValue, FormStore, PaymentForm, PaymentMethod, RegistrationPhase, RegistrationSession};

const MASK: &str = "********";

pub fn registration(session: &RegistrationSession) -> String {
    let mut out = String::from("== Register (/register) ==\n");
    let mut fields = vec![
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Phone,
    ];
    if session.otp_sent() {
        fields.push(RegistrationField::Otp);
    }
    if session.otp_verified() {
        fields.push(RegistrationField::Password);
        fields.push(RegistrationField::ConfirmPassword);
    }

    for &field in &fields {
        let value = session.form.get(field);
        let shown = if field.is_secret() && !value.is_empty() {
            MASK
        } else {
            value
        };
        let _ = writeln!(out, "  {field}: {shown}");
        if let Some(error) = session.errors.get(field) {
            let _ = writeln!(out, "    ! {error}");
        }
    }

    // Errors on inputs that are not shown yet, e.g. a failed OTP send.
    for field in RegistrationField::ALL {
        if fields.contains(&field) {
            continue;
        }
        if let Some(error) = session.errors.get(field) {
            let _ = writeln!(out, "  ! {field}: {error}");
        }
    }

    let status = match &session.phase {
        RegistrationPhase::Details => "enter your details, then `otp`".to_string(),
        RegistrationPhase::OtpIssued { ticket } => match &ticket.demo_code {
            Some(code) => format!("OTP sent (demo code: {code}), enter it and `verify`"),
            None => "OTP sent, enter it and `verify`".to_string(),
        },
        RegistrationPhase::OtpVerified => "verified, choose a password and `register`".to_string(),
        RegistrationPhase::Ready => "registered".to_string(),
    };
    let _ = writeln!(out, "  [{status}]");
    out
}

pub fn login() -> String {
    "== Login (/login) ==\n  `signin` to continue, `goto register` to create an account\n"
        .to_string()
}

fn field_text(value: &FieldValue) -> &str {
    match value {
        FieldValue::Text(text) => text,
        FieldValue::File(Some(file)) => &file.name,
        FieldValue::File(None) => "",
    }
}

pub fn wizard(store: &FormStore) -> String {
    let mut out = String::from("== Details (/form) ==\n");
    let Some(step) = store.state().step() else {
        out.push_str("  all steps complete\n");
        return out;
    };

    let _ = writeln!(
        out,
        "  Step {} of {}: {}",
        step.index() + 1,
        fp_core::wizard::STEP_COUNT,
        step.title()
    );
    if step == fp_core::WizardStep::Education {
        let flag = if store.extended_education() { "on" } else { "off" };
        let _ = writeln!(out, "  higher studies: {flag}");
    }
    for field in store.visible_fields() {
        let _ = writeln!(
            out,
            "  {field} ({}): {}",
            field.label(),
            field_text(store.record().get(*field))
        );
        if let Some(error) = store.errors().get(*field) {
            let _ = writeln!(out, "    ! {error}");
        }
    }
    out
}

fn payment_value(form: &PaymentForm, field: PaymentField) -> String {
    match field {
        PaymentField::Number => form.card().number.clone(),
        PaymentField::Name => form.card().name.clone(),
        PaymentField::Expiry => form.card().expiry.clone(),
        PaymentField::Cvc | PaymentField::Password => {
            let secret = if field == PaymentField::Cvc {
                &form.card().cvc
            } else {
                &form.net_banking().password
            };
            if secret.is_empty() {
                String::new()
            } else {
                MASK.to_string()
            }
        }
        PaymentField::UpiId => form.upi().upi_id.clone(),
        PaymentField::Bank => form
            .net_banking()
            .bank
            .map(|bank| bank.label().to_string())
            .unwrap_or_default(),
        PaymentField::Username => form.net_banking().username.clone(),
        PaymentField::Provider => form
            .wallet()
            .provider
            .map(|provider| provider.label().to_string())
            .unwrap_or_default(),
        PaymentField::MobileNumber => form.wallet().mobile_number.clone(),
    }
}

pub fn payment(form: &PaymentForm) -> String {
    let mut out = String::from("== Payment (/payment) ==\n  methods:");
    for method in PaymentMethod::ALL {
        let marker = if method == form.method() { "*" } else { " " };
        let _ = write!(out, " [{marker}] {method}");
    }
    out.push('\n');
    for field in form.visible_fields() {
        let _ = writeln!(out, "  {field}: {}", payment_value(form, field));
    }
    out
}

pub fn chat(log: &ChatLog, open: bool, pending: usize) -> String {
    let mut out = String::from(if open {
        "== Help chat ==\n"
    } else {
        "== Help chat (closed) ==\n"
    });
    for message in log.messages() {
        let who = match message.author {
            ChatAuthor::Bot => "bot",
            ChatAuthor::User => "you",
        };
        let _ = writeln!(out, "  {who}: {}", message.text);
    }
    if pending > 0 {
        let _ = writeln!(out, "  (typing...)");
    }
    out
}
