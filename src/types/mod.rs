pub mod envelopes;
pub mod municipality;
pub mod outcome;
