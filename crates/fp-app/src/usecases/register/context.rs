use std::sync::Arc;

use tokio::sync::Mutex;

use fp_core::RegistrationSession;

/// Shared registration context containing the session and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
#[derive(Clone)]
pub struct RegistrationContext {
    session: Arc<Mutex<RegistrationSession>>,
    /// Serializes dispatch so transition, action execution and state update
    /// run as one unit.
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for RegistrationContext {
    fn default() -> Self {
        Self::new(RegistrationSession::new())
    }
}

impl RegistrationContext {
    pub fn new(initial: RegistrationSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_session(&self) -> RegistrationSession {
        self.session.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called after acquiring `dispatch_lock`.
    pub async fn set_session(&self, session: RegistrationSession) {
        *self.session.lock().await = session;
    }
}
