mod simulated;

pub use simulated::SimulatedOtpService;
