mod slack_signature;

pub use slack_signature::*;
