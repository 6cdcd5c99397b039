mod detect;
mod resolve;

pub use detect::{DetectInput, DetectOperation, DetectOutput, build_filters};
pub use resolve::{BaseRef, ResolvedRefs, resolve_refs};
