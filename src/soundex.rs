/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::group::{lookup, DEFAULT_MAPPING};
use crate::{Encoder, PhoneticError, PhoneticGroup, SoundexCommons};

const CODE_LENGTH: usize = 4;
const PADDING: char = '0';

/// This is the [Soundex](https://en.wikipedia.org/wiki/Soundex) implementation of [Encoder].
///
/// The code is the first character of the input, kept as is, followed by three digits.
/// Every following character is lowercased and mapped to its [PhoneticGroup]. A digit
/// is written when the group is coded and differs from the group of the character
/// just before it.
///
/// Uncoded characters (vowels, `H`, `W`, `Y`, digits, punctuation...) are not written
/// but they still count as the previous group. So `H` and `W` separate two consonants
/// of the same group like vowels do, and both consonants are coded : `Ashcraft` gives
/// `A226` where American soundex gives `A261`.
///
/// Nothing is trimmed or removed from the input.
///
/// # Example :
///
/// ```rust
/// use rsoundex::{Encoder, Soundex};
///
/// let soundex = Soundex::default();
/// assert_eq!(soundex.encode("Robert"), "R163");
/// assert_eq!(soundex.encode("Ashcraft"), "A226");
/// assert_eq!(soundex.encode(""), "");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Soundex {
    mapping: [PhoneticGroup; 26],
}

impl Soundex {
    /// Construct a new [Soundex] with the provided mapping.
    ///
    /// There are implementations of [TryFrom] and [FromStr] for convenience.
    ///
    /// # Parameter
    ///
    /// * `mapping` : mapping array. It contains, for each letter its [PhoneticGroup]. Index 0
    /// is the group of `a`, index 1 is for `b` and so on for each letter of the latin alphabet.
    pub fn new(mapping: [PhoneticGroup; 26]) -> Self {
        Self { mapping }
    }

    /// Return the [PhoneticGroup] of `ch` once lowercased.
    pub fn group_of(&self, ch: char) -> PhoneticGroup {
        lookup(&self.mapping, ch.to_ascii_lowercase())
    }
}

/// This is the [Default] implementation for [Soundex], it returns an instance
/// with [DEFAULT_MAPPING].
impl Default for Soundex {
    fn default() -> Self {
        Self {
            mapping: DEFAULT_MAPPING,
        }
    }
}

impl FromStr for Soundex {
    type Err = PhoneticError;

    /// Construct a [Soundex] from the mapping in parameter. It must contain 26 digits,
    /// from `0` to `6`, one for each letter.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), rsoundex::PhoneticError> {
    /// use rsoundex::{Encoder, Soundex};
    ///
    /// // Same as the default mapping, except for 'h' which is coded like 'k'
    /// let soundex = "01230122022455012623010202".parse::<Soundex>()?;
    ///
    /// assert_eq!(soundex.encode("Ashcraft"), "A261");
    /// #    Ok(())
    /// # }
    /// ```
    fn from_str(mapping: &str) -> Result<Self, Self::Err> {
        let groups = mapping
            .chars()
            .map(PhoneticGroup::try_from)
            .collect::<Result<Vec<PhoneticGroup>, PhoneticError>>()?;
        let length = groups.len();
        let mapping: [PhoneticGroup; 26] = groups
            .try_into()
            .map_err(|_| PhoneticError::InvalidMappingLength(length))?;

        Ok(Self { mapping })
    }
}

impl TryFrom<&str> for Soundex {
    type Error = PhoneticError;

    /// Construct a [Soundex] from the mapping in parameter. See [FromStr].
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), rsoundex::PhoneticError> {
    /// use rsoundex::Soundex;
    ///
    /// let soundex = Soundex::try_from("01230120022455012623010202")?;
    ///
    /// assert_eq!(soundex, Soundex::default());
    /// #    Ok(())
    /// # }
    /// ```
    fn try_from(mapping: &str) -> Result<Self, Self::Error> {
        mapping.parse::<Soundex>()
    }
}

impl TryFrom<String> for Soundex {
    type Error = PhoneticError;

    fn try_from(mapping: String) -> Result<Self, Self::Error> {
        Self::try_from(mapping.as_str())
    }
}

impl Encoder for Soundex {
    fn encode(&self, value: &str) -> String {
        let mut iterator = value.chars();
        let first = match iterator.next() {
            None => return String::new(),
            Some(ch) => ch,
        };

        let mut code = String::with_capacity(CODE_LENGTH + first.len_utf8());
        code.push(first);
        let mut count = 1;
        let mut previous = self.group_of(first);
        while count < CODE_LENGTH {
            match iterator.next() {
                None => break,
                Some(ch) => {
                    let group = self.group_of(ch);
                    if group.is_coded() && group != previous {
                        code.push(group.digit());
                        count += 1;
                    }

                    // Uncoded characters reset adjacency too.
                    previous = group;
                }
            }
        }

        for _ in count..CODE_LENGTH {
            code.push(PADDING);
        }

        code
    }
}

impl SoundexCommons for Soundex {}

/// Return the soundex code of `input` using [Soundex::default].
///
/// An absent or empty input gives an empty code. Any other input gives a code of
/// exactly 4 characters.
///
/// ```rust
/// use rsoundex::soundex_code;
///
/// assert_eq!(soundex_code("Rupert"), "R163");
/// assert_eq!(soundex_code(Some("A")), "A000");
/// assert_eq!(soundex_code(None), "");
/// ```
pub fn soundex_code<'a>(input: impl Into<Option<&'a str>>) -> String {
    match input.into() {
        None => String::new(),
        Some(value) => Soundex::default().encode(value),
    }
}
