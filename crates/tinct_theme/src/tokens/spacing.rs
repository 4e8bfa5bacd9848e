//! Spacing tokens for theming

use serde::Serialize;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::S,
        SpacingToken::M,
        SpacingToken::L,
        SpacingToken::Xl,
        SpacingToken::Xxl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

/// Spacing scale in logical pixels, shared by both schemes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpacingScale {
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SpacingScale {
    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::S => self.s,
            SpacingToken::M => self.m,
            SpacingToken::L => self.l,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }

    /// `(name, value)` pairs from smallest to largest
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        SpacingToken::ALL.iter().map(move |t| (t.key(), self.get(*t)))
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            xs: 4.0,
            s: 8.0,
            m: 16.0,
            l: 24.0,
            xl: 32.0,
            xxl: 48.0,
        }
    }
}
