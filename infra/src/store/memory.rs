//! In-memory OTP store
//!
//! This module implements the process-wide passcode store:
//! - At most one live entry per phone number (issuing replaces)
//! - Single-use codes (successful verification removes the entry)
//! - Lazy expiry (stale entries are purged on next access, no sweeper)
//! - Every operation is atomic under a single mutex

use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use ep_core::domain::entities::otp_entry::OtpEntry;
use ep_core::services::verification::OtpStore;
use ep_core::time::{Clock, SystemClock};
use ep_shared::utils::phone::mask_phone_number;

/// Outcome of looking up an identifier under the lock
enum Lookup {
    Absent,
    Expired,
    Matched,
    Mismatch,
}

/// Process-local OTP store backed by a mutex-guarded map
///
/// The mutex is never held across an await point, which is what makes each
/// operation atomic with respect to concurrent callers. Expired entries for
/// identifiers that are never touched again stay in the map until process
/// restart; cardinality is bounded by the number of registering visitors.
pub struct MemoryOtpStore {
    /// Identifier -> live entry mapping
    entries: Mutex<HashMap<String, OtpEntry>>,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
}

impl MemoryOtpStore {
    /// Create a new store with an injected time source
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Create a new store running on wall-clock time
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Number of entries currently held, including not-yet-purged stale ones
    pub fn entry_count(&self) -> usize {
        self.lock_entries().len()
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, OtpEntry>> {
        // A poisoning panic cannot leave the map half-updated
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn issue(&self, identifier: &str, ttl: Duration) -> String {
        let entry = OtpEntry::new(self.clock.now(), ttl);
        let code = entry.code.clone();

        let replaced = self
            .lock_entries()
            .insert(identifier.to_string(), entry)
            .is_some();

        debug!(
            phone = %mask_phone_number(identifier),
            replaced_previous = replaced,
            event = "otp_stored",
            "Stored verification code"
        );

        code
    }

    async fn verify(&self, identifier: &str, candidate: &str) -> bool {
        let now = self.clock.now();
        let mut entries = self.lock_entries();

        let outcome = match entries.get(identifier) {
            None => Lookup::Absent,
            Some(entry) if entry.is_expired(now) => Lookup::Expired,
            Some(entry) if entry.code_matches(candidate) => Lookup::Matched,
            Some(_) => Lookup::Mismatch,
        };

        match outcome {
            Lookup::Absent => {
                debug!(
                    phone = %mask_phone_number(identifier),
                    event = "otp_absent",
                    "No verification code on record"
                );
                false
            }
            Lookup::Expired => {
                entries.remove(identifier);
                info!(
                    phone = %mask_phone_number(identifier),
                    event = "otp_expired_purged",
                    "Purged expired verification code on access"
                );
                false
            }
            Lookup::Matched => {
                entries.remove(identifier);
                info!(
                    phone = %mask_phone_number(identifier),
                    event = "otp_consumed",
                    "Verification code matched and consumed"
                );
                true
            }
            Lookup::Mismatch => {
                // Entry stays live; the caller may retry until expiry
                warn!(
                    phone = %mask_phone_number(identifier),
                    event = "otp_mismatch",
                    "Verification code mismatch"
                );
                false
            }
        }
    }

    async fn peek(&self, identifier: &str) -> Option<String> {
        let now = self.clock.now();
        let mut entries = self.lock_entries();

        let expired = matches!(entries.get(identifier), Some(entry) if entry.is_expired(now));
        if expired {
            entries.remove(identifier);
            return None;
        }

        entries.get(identifier).map(|entry| entry.code.clone())
    }
}
