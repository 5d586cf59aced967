pub mod encoder;
pub mod remote;
pub mod snapshot;
pub mod store;
