//! # Identifier Generator
//!
//! Fixed-length random strings and dated identifiers for order numbers,
//! tracking codes and the like.
//!
//! None of this is cryptographically secure and nothing here checks for
//! collisions. Callers that need uniqueness handle retries themselves.
//!
//! The free functions ([`random_string`], [`random_number`],
//! [`generate_random_id`]) build a fresh generator on every call, seeded from
//! the thread-local RNG, so concurrent callers never share seed state.
//! [`IdGenerator`] is the injectable form: it owns one RNG behind a mutex and
//! can be shared between threads or seeded for reproducible tests.
//!
//! ## Example
//!
//! ```rust
//! use textcheck::ident::{generate_random_id, random_number, random_string};
//!
//! assert_eq!(random_string(8).len(), 8);
//! assert!(random_number(6).chars().all(|c| c.is_ascii_digit()));
//!
//! let id = generate_random_id(5, Some("ORD"));
//! assert!(id.starts_with("ORD"));
//! ```
use chrono::{Datelike, Local, NaiveDate};
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower-case letters followed by digits.
pub const CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Decimal digits.
pub const NUMBERS: &str = "0123456789";

/// Character set random suffixes are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    #[default]
    Alphanumeric,
    Digits,
}

impl Alphabet {
    pub fn symbols(self) -> &'static [u8] {
        match self {
            Alphabet::Alphanumeric => CHARS.as_bytes(),
            Alphabet::Digits => NUMBERS.as_bytes(),
        }
    }
}

/// Draws `length` symbols from `alphabet` using `rng`.
fn draw<R: Rng>(rng: &mut R, alphabet: Alphabet, length: usize) -> String {
    let symbols = alphabet.symbols();
    (0..length)
        .map(|_| char::from(symbols[rng.random_range(0..symbols.len())]))
        .collect()
}

/// `yy` + `m`: two-digit year and unpadded month.
fn date_stamp(date: &impl Datelike) -> String {
    format!("{:02}{}", date.year().rem_euclid(100), date.month())
}

fn compose(prefix: Option<&str>, date: &impl Datelike, suffix: &str) -> String {
    format!("{}{}{}", prefix.unwrap_or_default(), date_stamp(date), suffix)
}

fn per_call_rng() -> SmallRng {
    let mut thread_rng = rand::rng();
    SmallRng::from_rng(&mut thread_rng)
}

/// Random string of `length` characters from [`CHARS`].
pub fn random_string(length: usize) -> String {
    draw(&mut per_call_rng(), Alphabet::Alphanumeric, length)
}

/// Random string of `length` characters from [`NUMBERS`].
pub fn random_number(length: usize) -> String {
    draw(&mut per_call_rng(), Alphabet::Digits, length)
}

/// `prefix + yy + m + random_string(length)` for today's local date.
pub fn generate_random_id(length: usize, prefix: Option<&str>) -> String {
    let today = Local::now().date_naive();
    let id = compose(prefix, &today, &random_string(length));
    tracing::debug!(length, "issued random id");
    id
}

/// Shareable, injectable random source for identifiers.
///
/// Draws are serialized through an internal lock, so one generator can be
/// handed to many threads without correlated output.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use textcheck::ident::IdGenerator;
///
/// let ids = IdGenerator::new(SmallRng::seed_from_u64(7));
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let id = ids.random_id_on(&date, 4, Some("INV"));
/// assert!(id.starts_with("INV263"));
/// assert_eq!(id.len(), 3 + 2 + 1 + 4);
/// ```
#[derive(Debug)]
pub struct IdGenerator<R = SmallRng> {
    rng: Mutex<R>,
}

impl IdGenerator<SmallRng> {
    /// Generator seeded from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(per_call_rng())
    }
}

impl Default for IdGenerator<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> IdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// `length` symbols from `alphabet`.
    pub fn random(&self, alphabet: Alphabet, length: usize) -> String {
        let mut rng = self.rng.lock();
        draw(&mut *rng, alphabet, length)
    }

    pub fn random_string(&self, length: usize) -> String {
        self.random(Alphabet::Alphanumeric, length)
    }

    pub fn random_number(&self, length: usize) -> String {
        self.random(Alphabet::Digits, length)
    }

    /// Dated identifier for an explicit `date`.
    pub fn random_id_on(&self, date: &NaiveDate, length: usize, prefix: Option<&str>) -> String {
        compose(prefix, date, &self.random_string(length))
    }

    /// Dated identifier for today's local date.
    pub fn random_id(&self, length: usize, prefix: Option<&str>) -> String {
        self.random_id_on(&Local::now().date_naive(), length, prefix)
    }

    /// Issues an identifier shaped by `config` for an explicit `date`.
    pub fn issue_on(&self, config: &IdConfig, date: &NaiveDate) -> String {
        let suffix = self.random(config.alphabet, config.length);
        let id = compose(config.prefix.as_deref(), date, &suffix);
        tracing::debug!(length = config.length, alphabet = ?config.alphabet, "issued id");
        id
    }

    /// Issues an identifier shaped by `config` for today's local date.
    pub fn issue(&self, config: &IdConfig) -> String {
        self.issue_on(config, &Local::now().date_naive())
    }
}

/// Shape of issued identifiers, usually loaded from JSON.
///
/// ```rust
/// use textcheck::ident::{Alphabet, IdConfig};
///
/// let cfg = IdConfig::from_json(r#"{ "prefix": "TRK", "alphabet": "digits" }"#).unwrap();
/// assert_eq!(cfg.length, 6);
/// assert_eq!(cfg.alphabet, Alphabet::Digits);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    /// Number of random symbols after the date stamp.
    pub length: usize,
    pub prefix: Option<String>,
    pub alphabet: Alphabet,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            length: 6,
            prefix: None,
            alphabet: Alphabet::Alphanumeric,
        }
    }
}

/// Errors raised while loading an [`IdConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read id config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid id config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl IdConfig {
    pub fn from_json(input: &str) -> Result<IdConfig, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<IdConfig, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        IdConfig::from_json(&raw)
    }
}
