//! OTP store implementations
//!
//! The service keeps live verification codes in process memory only: codes
//! are short-lived by design and a restart simply forces a re-request.

pub mod memory;

#[cfg(test)]
mod tests;

pub use memory::MemoryOtpStore;
