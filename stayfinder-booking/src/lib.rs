pub mod draft;
pub mod flow;
pub mod policy;
pub mod pricing;

pub use draft::{BookingDraft, PaymentInfo};
pub use flow::{BookingFlow, BookingStep, FlowError};
pub use policy::{can_cancel, ensure_cancellable, CANCELLATION_WINDOW_HOURS};
pub use pricing::{quote, PriceBreakdown, PricingConfig};
