//! This library computes the [Soundex](https://en.wikipedia.org/wiki/Soundex) phonetic code of a word.
//!
//! A code is the first character of the word followed by three digits. Words that sound
//! alike in English tend to share the same code, so codes can be compared for "sounds-like"
//! matching of names and words.
//!
//! This soundex does not implement the American `H`/`W` rule : `H` and `W` are handled like
//! vowels. See [Soundex] for details.
//!
//! ```rust
//! use rsoundex::{soundex_code, Encoder, Soundex};
//!
//! assert_eq!(soundex_code("Robert"), "R163");
//! assert_eq!(soundex_code(None), "");
//!
//! let soundex = Soundex::default();
//! assert!(soundex.is_encoded_equals("Robert", "Rupert"));
//! ```
use std::fmt;
use std::fmt::Formatter;

pub use crate::group::{classify, PhoneticGroup, DEFAULT_MAPPING};
pub use crate::soundex::{soundex_code, Soundex};

mod group;
mod soundex;

/// Errors
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PhoneticError {
    /// This variant is raised when a mapping does not contain exactly
    /// one group per letter. It holds the number of groups found.
    InvalidMappingLength(usize),
    /// This variant is raised when a character is not the digit of a [PhoneticGroup].
    InvalidGroup(char),
}

impl fmt::Display for PhoneticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMappingLength(length) => {
                write!(f, "Mapping must contain 26 groups, found {}", length)
            }
            Self::InvalidGroup(ch) => write!(f, "Invalid phonetic group : '{}'", ch),
        }
    }
}

impl std::error::Error for PhoneticError {}

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// String encoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsoundex::{Encoder, Soundex};
    ///
    /// let soundex = Soundex::default();
    ///
    /// assert_eq!(soundex.encode("Tymczak"), "T522");
    /// ```
    fn encode(&self, s: &str) -> String;

    /// This method check that two strings have the same code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsoundex::{Encoder, Soundex};
    ///
    /// let soundex = Soundex::default();
    /// assert!(soundex.is_encoded_equals("Smith", "Smythe"));
    /// assert!(!soundex.is_encoded_equals("Smith", "Jones"));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        let f = self.encode(first);
        let s = self.encode(second);

        f == s
    }
}

/// Similarity between the codes of two strings.
pub trait SoundexCommons: Encoder {
    /// Return the number of positions where both codes hold the same character.
    ///
    /// It is `0` if any of the codes is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsoundex::{Soundex, SoundexCommons};
    ///
    /// let soundex = Soundex::default();
    /// assert_eq!(soundex.difference("Smith", "Smythe"), 4);
    /// assert_eq!(soundex.difference("Ann", "Andrew"), 2);
    /// ```
    fn difference(&self, value1: &str, value2: &str) -> usize {
        let value1 = self.encode(value1);
        let value2 = self.encode(value2);

        value1
            .chars()
            .zip(value2.chars())
            .filter(|(c1, c2)| c1 == c2)
            .count()
    }
}
