use std::{fmt, str::FromStr};

use crate::foundation::error::{PlacementError, PlacementResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A letter of the pictograph alphabet.
///
/// Serialized as its glyph (`"A"`, `"Σ"`, `"W-"`, `"Λ-"`, ...).
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Sigma,
    Delta,
    Theta,
    Omega,
    WDash,
    XDash,
    YDash,
    ZDash,
    SigmaDash,
    DeltaDash,
    ThetaDash,
    OmegaDash,
    Phi,
    Psi,
    Lambda,
    PhiDash,
    PsiDash,
    LambdaDash,
    Alpha,
    Beta,
    Gamma,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Structural letter type. The alphabet populates types 1 through 6.
pub enum LetterType {
    /// Both motions shift.
    Type1,
    /// One shift, one static.
    Type2,
    /// One shift, one dash.
    Type3,
    /// One dash, one static.
    Type4,
    /// Both motions dash.
    Type5,
    /// Both motions static.
    Type6,
}

impl LetterType {
    /// Numeric type (`1..=6`).
    pub fn number(self) -> u8 {
        match self {
            LetterType::Type1 => 1,
            LetterType::Type2 => 2,
            LetterType::Type3 => 3,
            LetterType::Type4 => 4,
            LetterType::Type5 => 5,
            LetterType::Type6 => 6,
        }
    }

    /// Human-readable type name.
    pub fn name(self) -> &'static str {
        match self {
            LetterType::Type1 => "dual-shift",
            LetterType::Type2 => "shift",
            LetterType::Type3 => "cross-shift",
            LetterType::Type4 => "dash",
            LetterType::Type5 => "dual-dash",
            LetterType::Type6 => "static",
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type{}", self.number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Letter families with special dash handling.
pub enum LetterFamily {
    /// No family-specific behavior.
    Standard,
    /// The Λ family.
    Lambda,
    /// The Λ- family.
    LambdaDash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Everything the placement engine needs to know about a letter.
pub struct LetterClass {
    /// Structural type.
    pub letter_type: LetterType,
    /// Whether the two motions differ in type, making placement letter-specific.
    pub hybrid: bool,
    /// Dash handling family.
    pub family: LetterFamily,
}

/// Classify `letter`. Every letter membership check in the crate goes through here.
pub fn classify(letter: Letter) -> LetterClass {
    use Letter as L;

    let (letter_type, hybrid) = match letter {
        L::A | L::B | L::D | L::E | L::G | L::H | L::J | L::K | L::M | L::N | L::P | L::Q
        | L::S | L::T => (LetterType::Type1, false),
        L::C | L::F | L::I | L::L | L::O | L::R | L::U | L::V => (LetterType::Type1, true),
        L::W | L::X | L::Y | L::Z | L::Sigma | L::Delta | L::Theta | L::Omega => {
            (LetterType::Type2, true)
        }
        L::WDash
        | L::XDash
        | L::YDash
        | L::ZDash
        | L::SigmaDash
        | L::DeltaDash
        | L::ThetaDash
        | L::OmegaDash => (LetterType::Type3, true),
        L::Phi | L::Psi | L::Lambda => (LetterType::Type4, true),
        L::PhiDash | L::PsiDash | L::LambdaDash => (LetterType::Type5, false),
        L::Alpha | L::Beta | L::Gamma => (LetterType::Type6, false),
    };

    let family = match letter {
        L::Lambda => LetterFamily::Lambda,
        L::LambdaDash => LetterFamily::LambdaDash,
        _ => LetterFamily::Standard,
    };

    LetterClass {
        letter_type,
        hybrid,
        family,
    }
}

impl Letter {
    /// The whole alphabet in canonical order.
    pub const ALL: [Letter; 47] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
        Letter::Z,
        Letter::Sigma,
        Letter::Delta,
        Letter::Theta,
        Letter::Omega,
        Letter::WDash,
        Letter::XDash,
        Letter::YDash,
        Letter::ZDash,
        Letter::SigmaDash,
        Letter::DeltaDash,
        Letter::ThetaDash,
        Letter::OmegaDash,
        Letter::Phi,
        Letter::Psi,
        Letter::Lambda,
        Letter::PhiDash,
        Letter::PsiDash,
        Letter::LambdaDash,
        Letter::Alpha,
        Letter::Beta,
        Letter::Gamma,
    ];

    /// Glyph used in placement keys, file names and serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::H => "H",
            Letter::I => "I",
            Letter::J => "J",
            Letter::K => "K",
            Letter::L => "L",
            Letter::M => "M",
            Letter::N => "N",
            Letter::O => "O",
            Letter::P => "P",
            Letter::Q => "Q",
            Letter::R => "R",
            Letter::S => "S",
            Letter::T => "T",
            Letter::U => "U",
            Letter::V => "V",
            Letter::W => "W",
            Letter::X => "X",
            Letter::Y => "Y",
            Letter::Z => "Z",
            Letter::Sigma => "Σ",
            Letter::Delta => "Δ",
            Letter::Theta => "θ",
            Letter::Omega => "Ω",
            Letter::WDash => "W-",
            Letter::XDash => "X-",
            Letter::YDash => "Y-",
            Letter::ZDash => "Z-",
            Letter::SigmaDash => "Σ-",
            Letter::DeltaDash => "Δ-",
            Letter::ThetaDash => "θ-",
            Letter::OmegaDash => "Ω-",
            Letter::Phi => "Φ",
            Letter::Psi => "Ψ",
            Letter::Lambda => "Λ",
            Letter::PhiDash => "Φ-",
            Letter::PsiDash => "Ψ-",
            Letter::LambdaDash => "Λ-",
            Letter::Alpha => "α",
            Letter::Beta => "β",
            Letter::Gamma => "Γ",
        }
    }

    /// Full classification of this letter.
    pub fn class(self) -> LetterClass {
        classify(self)
    }

    /// Structural type.
    pub fn letter_type(self) -> LetterType {
        classify(self).letter_type
    }

    /// `true` when placement for this letter is letter-specific.
    pub fn is_hybrid(self) -> bool {
        classify(self).hybrid
    }

    /// `true` for the Λ family.
    pub fn is_lambda(self) -> bool {
        classify(self).family == LetterFamily::Lambda
    }

    /// `true` for the Λ- family.
    pub fn is_lambda_dash(self) -> bool {
        classify(self).family == LetterFamily::LambdaDash
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = PlacementError;

    fn from_str(s: &str) -> PlacementResult<Self> {
        let s = s.trim();
        Letter::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| PlacementError::validation(format!("unknown letter '{s}'")))
    }
}

impl serde::Serialize for Letter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Letter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/letter.rs"]
mod tests;
