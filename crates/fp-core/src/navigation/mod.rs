//! Route flow state machine.
//!
//! Defines a pure state transition function for top-level navigation
//! between the registration, login, details and payment views.

use serde::{Deserialize, Serialize};

/// Top-level view.
///
/// 顶层页面。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    /// 注册页。
    #[default]
    Register,
    /// 登录页。
    Login,
    /// 详情向导。
    Form,
    /// 支付页。
    Payment,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Form => "/form",
            Route::Payment => "/payment",
        }
    }
}

/// Events that move between views.
///
/// 页面切换事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteEvent {
    /// Registration finished and the profile was stored.
    ///
    /// 注册完成。
    Registered,
    /// Login form submitted. Credentials are not checked.
    ///
    /// 提交登录（不校验凭据）。
    SignedIn,
    /// The details wizard completed its last step.
    ///
    /// 向导完成。
    WizardCompleted,
    /// The payment gateway accepted the payment.
    ///
    /// 支付成功。
    PaymentSucceeded,
    /// "Register" link on the login view.
    ///
    /// 登录页的注册链接。
    GoToRegister,
    /// "Sign in" link on the registration view.
    ///
    /// 注册页的登录链接。
    GoToLogin,
    /// Leave the session from any view.
    ///
    /// 从任意页面退出会话。
    SignedOut,
}

/// Side-effects produced by route transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteAction {
    /// Start a fresh registration session.
    ///
    /// 开始新的注册会话。
    ResetRegistration,
    /// Mount the details wizard with an empty record and pre-fill it.
    ///
    /// 挂载向导：新建空表单并预填。
    MountWizard,
    /// Open the payment view with a fresh selector.
    ///
    /// 打开支付页。
    OpenPayment,
    /// Drop the persisted profile and in-flight state.
    ///
    /// 清除已保存资料与进行中的状态。
    TearDownSession,
}

/// Pure route state machine.
///
/// 纯状态机：不包含副作用。
pub struct RouteFlow;

impl RouteFlow {
    pub fn transition(route: Route, event: RouteEvent) -> (Route, Vec<RouteAction>) {
        match (route, event) {
            (Route::Register, RouteEvent::Registered) => (Route::Login, Vec::new()),
            (Route::Register, RouteEvent::GoToLogin) => (Route::Login, Vec::new()),
            (Route::Login, RouteEvent::GoToRegister) => {
                (Route::Register, vec![RouteAction::ResetRegistration])
            }
            (Route::Login, RouteEvent::SignedIn) => (Route::Form, vec![RouteAction::MountWizard]),
            (Route::Form, RouteEvent::WizardCompleted) => {
                (Route::Payment, vec![RouteAction::OpenPayment])
            }
            (Route::Payment, RouteEvent::PaymentSucceeded) => {
                (Route::Form, vec![RouteAction::MountWizard])
            }
            (_, RouteEvent::SignedOut) => (Route::Login, vec![RouteAction::TearDownSession]),
            (route, _event) => (route, Vec::new()),
        }
    }
}
