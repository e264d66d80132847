//! One-time passcode entry for visitor phone verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// A single issued passcode, keyed by phone number in the store.
///
/// An entry is live until it is consumed by a successful verification or
/// until `expires_at` passes. Mismatched candidates leave the entry intact,
/// so a visitor may retry until the code expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// The 6-digit passcode
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates a new entry with a freshly generated code.
    ///
    /// `now` is supplied by the caller's clock so expiry stays
    /// deterministic under test.
    pub fn new(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code: Self::generate_code(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a uniformly random 6-digit code in the range 100000-999999.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..1_000_000);
        format!("{:06}", code)
    }

    /// Checks whether the entry has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a candidate against the stored code in constant time.
    pub fn code_matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Time remaining until expiration, zero if already expired.
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let now = Utc::now();
        let entry = OtpEntry::new(now, Duration::seconds(300));

        assert_eq!(entry.code.len(), CODE_LENGTH);
        assert_eq!(entry.issued_at, now);
        assert_eq!(entry.expires_at, now + Duration::seconds(300));
        assert!(!entry.is_expired(now));
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = OtpEntry::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code should be numeric");
            assert!((100_000..1_000_000).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| OtpEntry::generate_code()).collect();

        // Extremely unlikely to collapse to a single value
        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_code_matches() {
        let entry = OtpEntry::new(Utc::now(), Duration::seconds(300));
        let code = entry.code.clone();

        assert!(entry.code_matches(&code));
        assert!(!entry.code_matches("000000"));
        assert!(!entry.code_matches(""));
        assert!(!entry.code_matches(&code[..5]));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let entry = OtpEntry::new(now, Duration::seconds(300));

        // Expiry instant itself is still live; one millisecond past is not
        assert!(!entry.is_expired(now + Duration::seconds(300)));
        assert!(entry.is_expired(now + Duration::seconds(300) + Duration::milliseconds(1)));
    }

    #[test]
    fn test_time_until_expiration() {
        let now = Utc::now();
        let entry = OtpEntry::new(now, Duration::seconds(300));

        assert_eq!(
            entry.time_until_expiration(now + Duration::seconds(100)),
            Duration::seconds(200)
        );
        assert_eq!(
            entry.time_until_expiration(now + Duration::seconds(400)),
            Duration::zero()
        );
    }

    #[test]
    fn test_serialization() {
        let entry = OtpEntry::new(Utc::now(), Duration::seconds(300));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: OtpEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }
}
