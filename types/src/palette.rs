//! Color palettes: numeric shade scales with one shade designated primary.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::token::HexColor;

/// Key under which the primary shade is exposed, next to the numeric shades.
pub const PRIMARY_ALIAS: &str = "Primary";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette has no shades")]
    Empty,
    #[error("`{0}` is not a numeric shade key")]
    InvalidShadeKey(String),
    #[error("shade {0} is listed twice")]
    DuplicateShade(ShadeKey),
    #[error("primary shade {0} is not one of the palette's shades")]
    MissingPrimaryShade(ShadeKey),
    #[error("primary color {0} does not match any shade")]
    PrimaryMatchesNoShade(String),
    #[error("primary color {color} matches several shades ({shades:?})")]
    AmbiguousPrimary { color: String, shades: Vec<ShadeKey> },
    #[error("override names shade {0}, which the base palette does not define")]
    UnknownShade(ShadeKey),
}

/// Numeric shade key (`50`, `100`, ... `900`). Ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShadeKey(u16);

impl ShadeKey {
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// The conventional shade scale every stock palette fills in.
pub const STANDARD_SHADES: [ShadeKey; 10] = [
    ShadeKey(50),
    ShadeKey(100),
    ShadeKey(200),
    ShadeKey(300),
    ShadeKey(400),
    ShadeKey(500),
    ShadeKey(600),
    ShadeKey(700),
    ShadeKey(800),
    ShadeKey(900),
];

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShadeKey {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject signs and whitespace that `u16::from_str` would otherwise accept.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaletteError::InvalidShadeKey(s.to_string()));
        }
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| PaletteError::InvalidShadeKey(s.to_string()))
    }
}

/// A named-shade color scale with exactly one primary shade.
///
/// Palettes are values: [`Palette::extend`] returns a new palette and leaves
/// `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    shades: BTreeMap<ShadeKey, HexColor>,
    primary: ShadeKey,
}

impl Palette {
    pub fn new<I>(shades: I, primary: ShadeKey) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (ShadeKey, HexColor)>,
    {
        let shades = collect_unique(shades)?;
        if shades.is_empty() {
            return Err(PaletteError::Empty);
        }
        if !shades.contains_key(&primary) {
            return Err(PaletteError::MissingPrimaryShade(primary));
        }
        Ok(Self { shades, primary })
    }

    /// Build a palette whose primary shade is the one carrying `primary`.
    ///
    /// Used when a theme spells the primary designation as a color literal.
    /// Exactly one shade must match.
    pub fn with_primary_color<I>(shades: I, primary: &HexColor) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (ShadeKey, HexColor)>,
    {
        let shades = collect_unique(shades)?;
        if shades.is_empty() {
            return Err(PaletteError::Empty);
        }
        let key = primary_key_for(&shades, primary)?;
        Ok(Self {
            shades,
            primary: key,
        })
    }

    #[must_use]
    pub fn shade(&self, key: ShadeKey) -> Option<&HexColor> {
        self.shades.get(&key)
    }

    /// Shades in ascending numeric order.
    pub fn shades(&self) -> impl Iterator<Item = (ShadeKey, &HexColor)> {
        self.shades.iter().map(|(key, color)| (*key, color))
    }

    pub fn keys(&self) -> impl Iterator<Item = ShadeKey> + '_ {
        self.shades.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    #[must_use]
    pub fn primary_key(&self) -> ShadeKey {
        self.primary
    }

    #[must_use]
    pub fn primary(&self) -> &HexColor {
        // Construction guarantees the primary key is present.
        &self.shades[&self.primary]
    }

    /// Apply `overrides` on top of this palette.
    ///
    /// Shades present in `overrides` replace the base value, every other shade
    /// keeps it. The shade set itself is fixed: overriding a shade the base
    /// lacks is an error.
    pub fn extend(&self, overrides: &PaletteOverrides) -> Result<Palette, PaletteError> {
        let mut shades = self.shades.clone();
        for (key, color) in &overrides.shades {
            match shades.get_mut(key) {
                Some(slot) => *slot = color.clone(),
                None => return Err(PaletteError::UnknownShade(*key)),
            }
        }

        let primary = match &overrides.primary {
            None => self.primary,
            Some(PrimaryOverride::Shade(key)) => {
                if !shades.contains_key(key) {
                    return Err(PaletteError::MissingPrimaryShade(*key));
                }
                *key
            }
            Some(PrimaryOverride::Color(color)) => primary_key_for(&shades, color)?,
        };

        Ok(Palette { shades, primary })
    }
}

fn collect_unique<I>(shades: I) -> Result<BTreeMap<ShadeKey, HexColor>, PaletteError>
where
    I: IntoIterator<Item = (ShadeKey, HexColor)>,
{
    let mut map = BTreeMap::new();
    for (key, color) in shades {
        if map.insert(key, color).is_some() {
            return Err(PaletteError::DuplicateShade(key));
        }
    }
    Ok(map)
}

fn primary_key_for(
    shades: &BTreeMap<ShadeKey, HexColor>,
    primary: &HexColor,
) -> Result<ShadeKey, PaletteError> {
    let matches: Vec<ShadeKey> = shades
        .iter()
        .filter(|(_, color)| color.same_color(primary))
        .map(|(key, _)| *key)
        .collect();
    match matches.as_slice() {
        [] => Err(PaletteError::PrimaryMatchesNoShade(primary.as_str().to_string())),
        [key] => Ok(*key),
        _ => Err(PaletteError::AmbiguousPrimary {
            color: primary.as_str().to_string(),
            shades: matches,
        }),
    }
}

/// How an override re-designates the primary shade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryOverride {
    Shade(ShadeKey),
    /// Pick the (single) shade carrying this color after the shade overrides
    /// are applied.
    Color(HexColor),
}

/// Shade replacements layered on a base palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteOverrides {
    shades: BTreeMap<ShadeKey, HexColor>,
    primary: Option<PrimaryOverride>,
}

impl PaletteOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shade(mut self, key: ShadeKey, color: HexColor) -> Self {
        self.shades.insert(key, color);
        self
    }

    #[must_use]
    pub fn primary(mut self, primary: PrimaryOverride) -> Self {
        self.primary = Some(primary);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty() && self.primary.is_none()
    }
}
