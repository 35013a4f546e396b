//! Line-oriented terminal shell.
//!
//! Maps each command onto the flow coordinator or the chat assistant and
//! prints the resulting view. It holds no state of its own.

pub mod command;
pub mod render;

use std::str::FromStr;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use fp_app::App;
use fp_core::payment::PaymentField;
use fp_core::registration::RegistrationField;
use fp_core::{FieldId, FieldValue, FileRef, RegistrationPhase, Route, RouteEvent};

pub use command::{ChatCommand, Command, CommandError, HELP};

pub struct Shell {
    app: App,
}

impl Shell {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Read commands until end of input or `quit`.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let view = self.render_current().await;
        output.write_all(view.as_bytes()).await?;

        loop {
            let prompt = format!("formpilot {}> ", self.app.flow.route().await.path());
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };

            let reply = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    debug!(?command, "shell command");
                    match self.execute(command).await {
                        Ok(text) => text,
                        Err(err) => {
                            warn!(error = %format!("{err:#}"), "shell command failed");
                            format!("error: {err:#}\n")
                        }
                    }
                }
                Err(err) => format!("error: {err}\n"),
            };
            output.write_all(reply.as_bytes()).await?;
        }

        output.flush().await?;
        Ok(())
    }

    /// Run one command and return the text to print.
    pub async fn execute(&self, command: Command) -> anyhow::Result<String> {
        let flow = &self.app.flow;
        let notice = match command {
            Command::Help => return Ok(format!("{HELP}\n")),
            Command::Show => None,
            Command::Set { field, value } => {
                self.set_field(&field, &value).await?;
                None
            }
            Command::RequestOtp => {
                flow.ensure_route(Route::Register).await?;
                flow.registration().request_otp().await?;
                None
            }
            Command::VerifyOtp => {
                flow.ensure_route(Route::Register).await?;
                flow.registration().submit_otp().await?;
                None
            }
            Command::Register => {
                let session = flow.submit_registration().await?;
                (session.phase == RegistrationPhase::Ready)
                    .then(|| "Registration successful! Please login.".to_string())
            }
            Command::GoToLogin => {
                flow.navigate(RouteEvent::GoToLogin).await?;
                None
            }
            Command::GoToRegister => {
                flow.navigate(RouteEvent::GoToRegister).await?;
                None
            }
            Command::SignIn => {
                flow.sign_in().await?;
                None
            }
            Command::Next => {
                flow.wizard_next().await?;
                None
            }
            Command::Back => {
                flow.wizard_back().await?;
                None
            }
            Command::HigherStudies(enabled) => {
                flow.ensure_route(Route::Form).await?;
                flow.wizard().set_extended_education(enabled).await;
                None
            }
            Command::Method(method) => {
                flow.ensure_route(Route::Payment).await?;
                flow.payment().select(method).await;
                None
            }
            Command::Pay => {
                let receipt = flow.pay().await?;
                Some(format!(
                    "Payment successful! Reference {} via {}.",
                    receipt.reference,
                    receipt.method.label()
                ))
            }
            Command::SignOut => {
                flow.sign_out().await?;
                None
            }
            Command::Chat(chat) => return self.chat(chat).await,
            Command::Say(text) => {
                self.app.chat.send(&text).await?;
                return self.chat(ChatCommand::Show).await;
            }
            Command::Quit => return Ok(String::new()),
        };

        let view = self.render_current().await;
        Ok(match notice {
            Some(notice) => format!("{notice}\n{view}"),
            None => view,
        })
    }

    async fn set_field(&self, field: &str, value: &str) -> anyhow::Result<()> {
        let flow = &self.app.flow;
        match flow.route().await {
            Route::Register => {
                let field = RegistrationField::from_str(field)?;
                flow.registration().set_field(field, value).await?;
            }
            Route::Form => {
                let field = FieldId::from_str(field)?;
                let value = if field.is_file() {
                    if value.is_empty() {
                        FieldValue::File(None)
                    } else {
                        FileRef::new(value).into()
                    }
                } else {
                    FieldValue::from(value)
                };
                flow.wizard().set_field(field, value).await?;
            }
            Route::Payment => {
                let field = PaymentField::from_str(field)?;
                flow.payment().set_field(field, value).await?;
            }
            Route::Login => anyhow::bail!("nothing to edit on {}", Route::Login.path()),
        }
        Ok(())
    }

    async fn chat(&self, command: ChatCommand) -> anyhow::Result<String> {
        let chat = &self.app.chat;
        match command {
            ChatCommand::Open => {
                chat.open().await;
            }
            ChatCommand::Close => {
                chat.close().await;
            }
            ChatCommand::Show => {}
        }
        Ok(render::chat(
            &chat.log().await,
            chat.is_open().await,
            chat.pending_replies().await,
        ))
    }

    async fn render_current(&self) -> String {
        let flow = &self.app.flow;
        match flow.route().await {
            Route::Register => render::registration(&flow.registration().get_session().await),
            Route::Login => render::login(),
            Route::Form => render::wizard(&flow.wizard().snapshot().await),
            Route::Payment => render::payment(&flow.payment().snapshot().await),
        }
    }
}
