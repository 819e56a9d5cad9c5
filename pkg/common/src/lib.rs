use chrono::{DateTime, Utc};
use rand::distr::{Alphanumeric, SampleString as _};
use rand::rngs::StdRng;
use rand::SeedableRng as _;

/// Transport-agnostic failure taxonomy shared by all service errors.
///
/// Service crates map their error variants onto a code; the gateway maps
/// codes onto HTTP status codes. Keeping the two mappings separate lets a
/// service be tested without pulling in any HTTP types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// The request payload or parameters were malformed.
    InvalidArgument,
    /// The caller is not authenticated (or presented invalid credentials).
    Unauthenticated,
    /// The addressed entity does not exist.
    NotFound,
    /// An unexpected internal failure.
    Internal,
}

/// Trait implemented by service error enums to expose their [`Code`].
pub trait ErrorCode {
    /// Returns the transport code for this error.
    fn code(&self) -> Code;
}

/// Trait for providing the current UTC time.
pub trait Now: Send + Sync + 'static {
    /// Returns the current UTC time.
    fn now() -> DateTime<Utc>;
}

/// Implementation that returns the actual current system time.
pub struct SystemNow;

impl Now for SystemNow {
    fn now() -> DateTime<Utc> {
        Utc::now()
    }
}

/// A source of cryptographically secure random tokens.
pub trait RandomSource: Send + Sync + 'static {
    /// Returns a secure alphanumeric string (session identifiers, etc.).
    fn alphanumeric(len: usize) -> String;
}

/// Default secure generator seeded from the operating system.
///
/// [`Documentation`]: https://lucia-auth.com/sessions/basic
#[derive(Debug, Clone, Default)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn alphanumeric(len: usize) -> String {
        let mut rng = StdRng::from_os_rng();
        Alphanumeric.sample_string(&mut rng, len)
    }
}

#[cfg(feature = "mock")]
pub mod mock {
    use super::*;
    use chrono::TimeZone as _;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Mock time provider returning a fixed instant (2020-01-01 00:00:00 UTC).
    pub struct MockNow;

    impl Now for MockNow {
        fn now() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        }
    }

    /// Mock random generator returning a fixed token.
    #[derive(Default, Clone)]
    pub struct MockRandom;

    impl RandomSource for MockRandom {
        fn alphanumeric(_: usize) -> String {
            "random".to_string()
        }
    }

    static SEQ: AtomicU64 = AtomicU64::new(0);

    /// Mock random generator returning a distinct token per call, for tests
    /// that allocate more than one session.
    #[derive(Default, Clone)]
    pub struct SeqRandom;

    impl RandomSource for SeqRandom {
        fn alphanumeric(_: usize) -> String {
            format!("random-{}", SEQ.fetch_add(1, Ordering::Relaxed))
        }
    }
}
