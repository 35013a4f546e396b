//! Shell command parsing.

use std::str::FromStr;

use fp_core::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Open,
    Close,
    Show,
}

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    /// Set a field of the current view. The name is resolved against the
    /// view when executed.
    Set { field: String, value: String },
    RequestOtp,
    VerifyOtp,
    Register,
    GoToLogin,
    GoToRegister,
    SignIn,
    Next,
    Back,
    HigherStudies(bool),
    Method(PaymentMethod),
    Pay,
    SignOut,
    Chat(ChatCommand),
    Say(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Method(#[from] fp_core::payment::UnknownOptionError),
}

pub const HELP: &str = "\
commands:
  show                      render the current view
  set <field> [value]       set a field of the current view
  otp                       send the OTP (register)
  verify                    submit the entered OTP (register)
  register                  create the account (register)
  goto login|register       follow the link between register and login
  signin                    sign in (login)
  next | back               move through the details wizard (form)
  higher on|off             toggle higher-studies fields (form)
  method <name>             card | upi | netBanking | wallet (payment)
  pay                       pay now (payment)
  signout                   leave the session
  chat open|close|show      help chat widget
  say <text>                send a chat message
  quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }
        // `raw` keeps the text after the first separator exactly as typed.
        let (head, raw) = match line.split_once(char::is_whitespace) {
            Some((head, raw)) => (head, raw),
            None => (line.trim_end(), ""),
        };
        let rest = raw.trim();

        let command = match head {
            "help" | "?" => Command::Help,
            "show" => Command::Show,
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::Usage("set <field> [value]"));
                }
                Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            }
            "otp" => Command::RequestOtp,
            "verify" => Command::VerifyOtp,
            "register" => Command::Register,
            "goto" => match rest {
                "login" => Command::GoToLogin,
                "register" => Command::GoToRegister,
                _ => return Err(CommandError::Usage("goto login|register")),
            },
            "signin" => Command::SignIn,
            "next" => Command::Next,
            "back" => Command::Back,
            "higher" => match rest {
                "on" => Command::HigherStudies(true),
                "off" => Command::HigherStudies(false),
                _ => return Err(CommandError::Usage("higher on|off")),
            },
            "method" => Command::Method(PaymentMethod::from_str(rest)?),
            "pay" => Command::Pay,
            "signout" => Command::SignOut,
            "chat" => match rest {
                "open" => Command::Chat(ChatCommand::Open),
                "close" => Command::Chat(ChatCommand::Close),
                "" | "show" => Command::Chat(ChatCommand::Show),
                _ => return Err(CommandError::Usage("chat open|close|show")),
            },
            "say" => Command::Say(raw.to_string()),
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set address 12 MG Road, Pune").unwrap(),
            Some(Command::Set {
                field: "address".to_string(),
                value: "12 MG Road, Pune".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears() {
        assert_eq!(
            Command::parse("set bank").unwrap(),
            Some(Command::Set {
                field: "bank".to_string(),
                value: String::new(),
            })
        );
        assert_eq!(
            Command::parse("set").unwrap_err(),
            CommandError::Usage("set <field> [value]")
        );
    }

    #[test]
    fn method_uses_wire_names() {
        assert_eq!(
            Command::parse("method netBanking").unwrap(),
            Some(Command::Method(PaymentMethod::NetBanking))
        );
        assert!(matches!(
            Command::parse("method cash"),
            Err(CommandError::Method(_))
        ));
    }

    #[test]
    fn say_keeps_text_as_typed() {
        assert_eq!(
            Command::parse("say   how do I upload?  ").unwrap(),
            Some(Command::Say("  how do I upload?  ".to_string()))
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            Command::parse("dance").unwrap_err(),
            CommandError::Unknown("dance".to_string())
        );
    }
}
