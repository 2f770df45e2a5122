use serde::Serialize;

use crate::condition::ConditionCategory;

/// sRGB color stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Background theme for a condition.
///
/// `id` is the opaque token handed to the view layer; `gradient` lists the
/// same theme's top-left, middle and bottom-right stops for renderers that
/// paint colors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeToken {
    pub id: &'static str,
    pub gradient: [Rgb; 3],
}

impl ThemeToken {
    /// Bright blue into amber
    pub const SUNNY: ThemeToken = ThemeToken {
        id: "bg-gradient-to-br from-sky-300 via-sky-500 to-amber-300",
        gradient: [Rgb(0x7d, 0xd3, 0xfc), Rgb(0x0e, 0xa5, 0xe9), Rgb(0xfc, 0xd3, 0x4d)],
    };

    /// Dark slate into deep blue
    pub const RAINY: ThemeToken = ThemeToken {
        id: "bg-gradient-to-br from-slate-900 via-slate-800 to-sky-800",
        gradient: [Rgb(0x0f, 0x17, 0x2a), Rgb(0x1e, 0x29, 0x3b), Rgb(0x07, 0x59, 0x85)],
    };

    /// White and light grey
    pub const SNOWY: ThemeToken = ThemeToken {
        id: "bg-gradient-to-br from-slate-100 via-slate-200 to-sky-100",
        gradient: [Rgb(0xf1, 0xf5, 0xf9), Rgb(0xe2, 0xe8, 0xf0), Rgb(0xe0, 0xf2, 0xfe)],
    };

    /// Neutral/cloudy
    pub const DEFAULT: ThemeToken = ThemeToken {
        id: "bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900",
        gradient: [Rgb(0x0f, 0x17, 0x2a), Rgb(0x1e, 0x29, 0x3b), Rgb(0x0f, 0x17, 0x2a)],
    };

    /// True for themes whose background is light enough to need dark text
    pub fn is_light(&self) -> bool {
        let Rgb(r, g, b) = self.gradient[0];
        // Rec. 601 luma
        (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000 > 160
    }
}

/// Pick the background theme for a condition category.
pub fn theme_for(category: ConditionCategory) -> ThemeToken {
    match category {
        ConditionCategory::Sunny => ThemeToken::SUNNY,
        ConditionCategory::Rainy => ThemeToken::RAINY,
        ConditionCategory::Snowy => ThemeToken::SNOWY,
        ConditionCategory::Default => ThemeToken::DEFAULT,
    }
}
