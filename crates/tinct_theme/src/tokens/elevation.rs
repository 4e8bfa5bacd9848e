//! Elevation tokens for theming
//!
//! Each level is a style fragment a surface can apply directly: a drop
//! shadow description plus the platform elevation value.

use serde::Serialize;
use tinct_core::Color;

/// Elevation level keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ElevationLevel {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl ElevationLevel {
    pub const ALL: [ElevationLevel; 6] = [
        ElevationLevel::Level0,
        ElevationLevel::Level1,
        ElevationLevel::Level2,
        ElevationLevel::Level3,
        ElevationLevel::Level4,
        ElevationLevel::Level5,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Level0 => "level0",
            Self::Level1 => "level1",
            Self::Level2 => "level2",
            Self::Level3 => "level3",
            Self::Level4 => "level4",
            Self::Level5 => "level5",
        }
    }
}

/// A shadow/elevation style fragment
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Elevation {
    pub shadow_color: Color,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub blur_radius: f32,
    /// Platform elevation (z-depth) value
    pub elevation: f32,
}

impl Elevation {
    pub const fn new(offset_y: f32, opacity: f32, blur_radius: f32, elevation: f32) -> Self {
        Self {
            shadow_color: Color::BLACK,
            offset_x: 0.0,
            offset_y,
            opacity,
            blur_radius,
            elevation,
        }
    }

    pub const fn none() -> Self {
        Self {
            shadow_color: Color::TRANSPARENT,
            offset_x: 0.0,
            offset_y: 0.0,
            opacity: 0.0,
            blur_radius: 0.0,
            elevation: 0.0,
        }
    }
}

impl Default for Elevation {
    fn default() -> Self {
        Self::none()
    }
}

/// Elevation presets, shared by both schemes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElevationPresets {
    pub level0: Elevation,
    pub level1: Elevation,
    pub level2: Elevation,
    pub level3: Elevation,
    pub level4: Elevation,
    pub level5: Elevation,
}

impl ElevationPresets {
    /// Get elevation by level
    pub fn get(&self, level: ElevationLevel) -> &Elevation {
        match level {
            ElevationLevel::Level0 => &self.level0,
            ElevationLevel::Level1 => &self.level1,
            ElevationLevel::Level2 => &self.level2,
            ElevationLevel::Level3 => &self.level3,
            ElevationLevel::Level4 => &self.level4,
            ElevationLevel::Level5 => &self.level5,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Elevation)> + '_ {
        ElevationLevel::ALL.iter().map(move |l| (l.key(), self.get(*l)))
    }
}

impl Default for ElevationPresets {
    fn default() -> Self {
        Self {
            level0: Elevation::none(),
            level1: Elevation::new(1.0, 0.15, 3.0, 1.0),
            level2: Elevation::new(2.0, 0.17, 6.0, 3.0),
            level3: Elevation::new(4.0, 0.19, 8.0, 6.0),
            level4: Elevation::new(6.0, 0.21, 10.0, 8.0),
            level5: Elevation::new(8.0, 0.23, 12.0, 12.0),
        }
    }
}
