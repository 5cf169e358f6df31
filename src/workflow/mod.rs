pub mod barrier;
pub mod coordinator;
pub mod countdown;
pub mod submission_ctx;

pub use barrier::{RevealBarrier, Signal, Source};
pub use coordinator::{CoordinatorSettings, Phase, SubmissionCoordinator, SubmitOutcome};
pub use countdown::Countdown;
pub use submission_ctx::SubmissionCtx;
