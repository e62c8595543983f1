//! # Handlers for dbot framework
//!
//! Generic handlers shared by bots built on the handler chain.

mod logging;

#[cfg(test)]
mod test;

pub use logging::LoggingHandler;
