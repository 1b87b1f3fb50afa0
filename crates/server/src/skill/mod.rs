//! Intent routing and response rendering

mod router;

pub use router::IntentRouter;
