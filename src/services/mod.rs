pub mod classifier;
pub mod selection;
pub mod share;

pub use classifier::{Classifier, HttpClassifier};
pub use selection::SelectionTracker;
pub use share::{CopyLinkAction, ShareLinks, COPY_FAILED_MESSAGE, COPY_OK_MESSAGE};
