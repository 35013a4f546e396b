use std::sync::Arc;

use crate::usecases::{
    ChatAssistant, FlowCoordinator, PaymentOrchestrator, RegistrationOrchestrator, SessionContext,
    SubmitPayment, WizardOrchestrator,
};
use crate::AppDeps;

/// The application runtime.
pub struct App {
    pub flow: Arc<FlowCoordinator>,
    pub chat: Arc<ChatAssistant>,
}

impl App {
    /// Create new App instance from dependencies
    /// 从依赖创建新的 App 实例
    ///
    /// This constructor signature IS the dependency manifest.
    /// 这个构造函数签名就是依赖清单。
    pub fn new(deps: AppDeps) -> Self {
        let session = SessionContext::new(deps.profile_repo).arc();
        let registration = Arc::new(RegistrationOrchestrator::new(deps.otp, session.clone()));
        let wizard = Arc::new(WizardOrchestrator::new(session.clone()));
        let payment = Arc::new(PaymentOrchestrator::new(Arc::new(SubmitPayment::new(
            deps.payment_gateway,
        ))));
        let flow = Arc::new(FlowCoordinator::new(session, registration, wizard, payment));
        let chat = Arc::new(ChatAssistant::new(deps.chat_responder));

        Self { flow, chat }
    }
}
