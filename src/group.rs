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
use std::fmt::{Display, Formatter};

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

use crate::PhoneticError;

use PhoneticGroup::*;

/// Phonetic group of a letter.
///
/// Letters of the same group sound alike and share the same digit in a code.
/// [PhoneticGroup::Uncoded] is never written into a code.
#[derive(
    Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, Sequence,
)]
pub enum PhoneticGroup {
    /// `0` : vowels, `H`, `W`, `Y` and anything that is not a latin letter.
    Uncoded,
    /// `1` : `B`, `F`, `P`, `V`.
    Labial,
    /// `2` : `C`, `G`, `J`, `K`, `Q`, `S`, `X`, `Z`.
    Guttural,
    /// `3` : `D`, `T`.
    Dental,
    /// `4` : `L`.
    Lateral,
    /// `5` : `M`, `N`.
    Nasal,
    /// `6` : `R`.
    Rhotic,
}

impl PhoneticGroup {
    /// Digit of this group in a code.
    pub fn digit(&self) -> char {
        match self {
            Self::Uncoded => '0',
            Self::Labial => '1',
            Self::Guttural => '2',
            Self::Dental => '3',
            Self::Lateral => '4',
            Self::Nasal => '5',
            Self::Rhotic => '6',
        }
    }

    /// Return `false` for [PhoneticGroup::Uncoded], `true` otherwise.
    pub fn is_coded(&self) -> bool {
        self != &Self::Uncoded
    }
}

impl Display for PhoneticGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl TryFrom<char> for PhoneticGroup {
    type Error = PhoneticError;

    /// Parse a group from its digit.
    ///
    /// ```rust
    /// # fn main() -> Result<(), rsoundex::PhoneticError> {
    /// use rsoundex::PhoneticGroup;
    ///
    /// assert_eq!(PhoneticGroup::try_from('5')?, PhoneticGroup::Nasal);
    /// assert!(PhoneticGroup::try_from('9').is_err());
    /// #    Ok(())
    /// # }
    /// ```
    fn try_from(digit: char) -> Result<Self, Self::Error> {
        all::<PhoneticGroup>()
            .find(|group| group.digit() == digit)
            .ok_or(PhoneticError::InvalidGroup(digit))
    }
}

/// Group of each letter of the latin alphabet. Index 0 is `a`, index 1 is `b`...etc.
///
/// As a digit string, it reads `01230120022455012623010202`.
pub const DEFAULT_MAPPING: [PhoneticGroup; 26] = [
    Uncoded, Labial, Guttural, Dental, Uncoded, Labial, Guttural, Uncoded, Uncoded, Guttural,
    Guttural, Lateral, Nasal, Nasal, Uncoded, Labial, Guttural, Rhotic, Guttural, Dental, Uncoded,
    Labial, Uncoded, Guttural, Uncoded, Guttural,
];

/// Group of a character with [DEFAULT_MAPPING].
///
/// `ch` is expected to be lowercase. Any character outside `a..=z`, uppercase letters
/// included, is [PhoneticGroup::Uncoded].
///
/// ```rust
/// use rsoundex::{classify, PhoneticGroup};
///
/// assert_eq!(classify('m'), PhoneticGroup::Nasal);
/// assert_eq!(classify('h'), PhoneticGroup::Uncoded);
/// assert_eq!(classify('7'), PhoneticGroup::Uncoded);
/// ```
pub fn classify(ch: char) -> PhoneticGroup {
    lookup(&DEFAULT_MAPPING, ch)
}

pub(crate) fn lookup(mapping: &[PhoneticGroup; 26], ch: char) -> PhoneticGroup {
    if ch.is_ascii_lowercase() {
        mapping[ch as usize - 'a' as usize]
    } else {
        Uncoded
    }
}
