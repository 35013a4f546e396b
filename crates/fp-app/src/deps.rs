//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for App construction. Not a builder: no defaults,
//! no optional fields, no hidden logic.
//! 仅用于参数打包：无默认值、无可选字段、无隐藏逻辑。

use std::sync::Arc;

use fp_core::ports::{ChatResponderPort, OtpPort, PaymentGatewayPort, ProfileRepositoryPort};

/// Application dependency grouping
/// 应用依赖分组
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub profile_repo: Arc<dyn ProfileRepositoryPort>,

    // Simulated services / 模拟服务
    pub otp: Arc<dyn OtpPort>,
    pub payment_gateway: Arc<dyn PaymentGatewayPort>,
    pub chat_responder: Arc<dyn ChatResponderPort>,
}
