pub mod create;
pub mod deploy;
pub mod dns;
pub mod launch;
pub mod resolve;
pub mod setup;
