//! Font weight tokens

use serde::Serialize;

/// Semantic font weight token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontToken {
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontToken {
    pub const ALL: [FontToken; 4] = [
        FontToken::Regular,
        FontToken::Medium,
        FontToken::Semibold,
        FontToken::Bold,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }
}

/// CSS-style numeric font weight (100..=900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Font weights, shared by both schemes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontWeights {
    pub regular: FontWeight,
    pub medium: FontWeight,
    pub semibold: FontWeight,
    pub bold: FontWeight,
}

impl FontWeights {
    pub fn get(&self, token: FontToken) -> FontWeight {
        match token {
            FontToken::Regular => self.regular,
            FontToken::Medium => self.medium,
            FontToken::Semibold => self.semibold,
            FontToken::Bold => self.bold,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FontWeight)> + '_ {
        FontToken::ALL.iter().map(move |t| (t.key(), self.get(*t)))
    }
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            regular: FontWeight::NORMAL,
            medium: FontWeight::MEDIUM,
            semibold: FontWeight::SEMIBOLD,
            bold: FontWeight::BOLD,
        }
    }
}
