//! Email logic management.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pattern accepted by [`Email::parse`], anchored on both ends.
const EMAIL_PATTERN: &str = concat!(
    "(^",
    // local part.
    r"[a-zA-Z0-9]{1}",
    r"((\.|-|_)?[a-zA-Z0-9]+(-|_)?)*",
    // optional `+` tag.
    r"(\+([a-zA-Z0-9]+(\.|-|_)?)*[a-zA-Z0-9_-]{1})?",
    "@",
    // domain part, at least one dot.
    r"([a-zA-Z0-9]+((-|_)?[a-zA-Z0-9]+)*)+",
    r"(\.[a-zA-Z0-9]+((-|_)?[a-zA-Z0-9]+)*)+",
    "$)",
);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern must compile")
});

/// Value object of a valid email address.
///
/// The wrapped string is kept verbatim: no trimming, no case-folding.
/// [`Email::NIL`] (also [`Email::default`]) stands for "no address".
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Minimum email length, in bytes: `te@te.te`, 2 chars per part plus
    /// `@` and `.`.
    pub const MIN_LENGTH: usize = 8;
    /// Maximum email length, in bytes.
    pub const MAX_LENGTH: usize = 255;

    /// The "no address" value.
    pub const NIL: Self = Self(String::new());

    /// Converts a [`String`] into a valid [`Email`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the string is empty, is not between
    /// [`Email::MIN_LENGTH`] and [`Email::MAX_LENGTH`] bytes long, or does
    /// not match the email grammar.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(Error::validation("email value cannot be empty"));
        }

        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&value.len()) {
            return Err(Error::validation(format!(
                "email length must be between {} and {}",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH
            )));
        }

        if !EMAIL_RE.is_match(&value) {
            return Err(Error::validation(format!(
                "email value {value:?} should match regexp {:?}",
                EMAIL_RE.as_str()
            )));
        }

        Ok(Self(value))
    }

    /// Same as [`Email::parse`], for values known to be valid at build time
    /// (constants, fixtures).
    ///
    /// # Panics
    ///
    /// Panics with the validation message if `value` is not a valid email.
    pub fn must_parse(value: impl Into<String>) -> Self {
        match Self::parse(value) {
            Ok(email) => email,
            Err(err) => panic!("{err}"),
        }
    }

    /// Whether this is [`Email::NIL`].
    #[inline]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before the first `@`.
    pub fn local_part(&self) -> &str {
        match self.0.split_once('@') {
            Some((local, _)) => local,
            None => &self.0,
        }
    }

    /// Part after the first `@`, dots included.
    pub fn domain_part(&self) -> &str {
        match self.0.split_once('@') {
            Some((_, domain)) => domain,
            None => "",
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
