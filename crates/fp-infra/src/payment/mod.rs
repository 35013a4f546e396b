mod simulated;

pub use simulated::SimulatedPaymentGateway;
