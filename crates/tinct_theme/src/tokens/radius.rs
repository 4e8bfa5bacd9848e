//! Border radius tokens for theming

use serde::Serialize;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Xs,
    S,
    M,
    L,
    Xl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 6] = [
        RadiusToken::Xs,
        RadiusToken::S,
        RadiusToken::M,
        RadiusToken::L,
        RadiusToken::Xl,
        RadiusToken::Full,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

/// Corner radii, shared by both schemes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusScale {
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
    /// Pill / circle
    pub full: f32,
}

impl RadiusScale {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Xs => self.xs,
            RadiusToken::S => self.s,
            RadiusToken::M => self.m,
            RadiusToken::L => self.l,
            RadiusToken::Xl => self.xl,
            RadiusToken::Full => self.full,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        RadiusToken::ALL.iter().map(move |t| (t.key(), self.get(*t)))
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            xs: 4.0,
            s: 8.0,
            m: 12.0,
            l: 16.0,
            xl: 28.0,
            full: 9999.0,
        }
    }
}
