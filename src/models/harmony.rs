//! Color harmony rules.
//!
//! A harmony rule derives an ordered set of related colors from a base color.
//! Most rules rotate the hue by a fixed list of offsets; the monochromatic
//! rule keeps the hue and steps saturation and lightness instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hsl::{normalize_hue, HslColor};
use super::swatch::Swatch;

/// Offsets used when a harmony name is not recognized: the base color only.
pub const IDENTITY_OFFSETS: &[f64] = &[0.0];

const ANALOGOUS: &[f64] = &[-30.0, 0.0, 30.0];
const COMPLEMENTARY: &[f64] = &[0.0, 180.0];
const TRIADIC: &[f64] = &[0.0, 120.0, 240.0];
const SPLIT_COMPLEMENTARY: &[f64] = &[0.0, 150.0, 210.0];
const TETRADIC: &[f64] = &[0.0, 90.0, 180.0, 270.0];

const MONOCHROMATIC: &[ToneStep] = &[
    ToneStep::new(Adjust::Keep, Adjust::Keep),
    ToneStep::new(Adjust::Keep, Adjust::Lower { by: 30.0, floor: 20.0 }),
    ToneStep::new(Adjust::Lower { by: 30.0, floor: 20.0 }, Adjust::Keep),
    ToneStep::new(Adjust::Keep, Adjust::Raise { by: 30.0, ceiling: 80.0 }),
    ToneStep::new(Adjust::Raise { by: 30.0, ceiling: 100.0 }, Adjust::Keep),
];

/// Named harmony rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Neighbours 30 degrees either side of the base
    #[default]
    Analogous,
    /// Base and its opposite
    Complementary,
    /// Three hues 120 degrees apart
    Triadic,
    /// Base plus the two neighbours of its complement
    SplitComplementary,
    /// Four hues 90 degrees apart (double complementary)
    Tetradic,
    /// One hue, varied saturation and lightness
    Monochromatic,
}

impl HarmonyKind {
    /// All harmony kinds in display order.
    pub const ALL: [Self; 6] = [
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    /// Machine name, as accepted by [`FromStr`] and written to config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Complementary",
            Self::Tetradic => "Tetradic",
            Self::Monochromatic => "Monochromatic",
        }
    }

    /// One-line description shown next to the selector.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Analogous => "Colors next to each other on the wheel; calm and cohesive.",
            Self::Complementary => "Opposite colors on the wheel; maximum contrast.",
            Self::Triadic => "Three colors evenly spaced; vibrant yet balanced.",
            Self::SplitComplementary => {
                "The base plus the two colors adjacent to its complement; softer contrast."
            }
            Self::Tetradic => "Two complementary pairs forming a rectangle; rich variety.",
            Self::Monochromatic => "One hue in several tints and shades.",
        }
    }

    /// How this kind derives its colors.
    #[must_use]
    pub const fn recipe(self) -> HarmonyRecipe {
        match self {
            Self::Analogous => HarmonyRecipe::HueOffsets(ANALOGOUS),
            Self::Complementary => HarmonyRecipe::HueOffsets(COMPLEMENTARY),
            Self::Triadic => HarmonyRecipe::HueOffsets(TRIADIC),
            Self::SplitComplementary => HarmonyRecipe::HueOffsets(SPLIT_COMPLEMENTARY),
            Self::Tetradic => HarmonyRecipe::HueOffsets(TETRADIC),
            Self::Monochromatic => HarmonyRecipe::Tonal(MONOCHROMATIC),
        }
    }

    /// Number of colors this kind produces.
    #[must_use]
    pub const fn color_count(self) -> usize {
        match self.recipe() {
            HarmonyRecipe::HueOffsets(offsets) => offsets.len(),
            HarmonyRecipe::Tonal(steps) => steps.len(),
        }
    }

    /// Next kind in [`HarmonyKind::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous kind in [`HarmonyKind::ALL`], wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a harmony name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHarmony(pub String);

impl fmt::Display for UnknownHarmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony '{}' (expected one of: {})",
            self.0,
            HarmonyKind::ALL.map(HarmonyKind::name).join(", ")
        )
    }
}

impl std::error::Error for UnknownHarmony {}

impl FromStr for HarmonyKind {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.name().replace('-', "") == normalized)
            .ok_or_else(|| UnknownHarmony(s.to_string()))
    }
}

/// Derivation rule for a harmony kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HarmonyRecipe {
    /// Rotate the base hue by each signed offset (degrees), in order
    HueOffsets(&'static [f64]),
    /// Keep the base hue and apply each saturation/lightness step, in order
    Tonal(&'static [ToneStep]),
}

/// One saturation/lightness step of a tonal recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneStep {
    /// Adjustment to saturation
    pub saturation: Adjust,
    /// Adjustment to lightness
    pub lightness: Adjust,
}

impl ToneStep {
    const fn new(saturation: Adjust, lightness: Adjust) -> Self {
        Self {
            saturation,
            lightness,
        }
    }
}

/// Bounded adjustment of a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjust {
    /// Leave the value unchanged
    Keep,
    /// Subtract `by`, never going below `floor`
    Lower {
        /// Amount subtracted
        by: f64,
        /// Lower bound of the result
        floor: f64,
    },
    /// Add `by`, never going above `ceiling`
    Raise {
        /// Amount added
        by: f64,
        /// Upper bound of the result
        ceiling: f64,
    },
}

impl Adjust {
    /// Applies the adjustment to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Keep => value,
            Self::Lower { by, floor } => (value - by).max(floor),
            Self::Raise { by, ceiling } => (value + by).min(ceiling),
        }
    }
}

/// Ordered colors produced by a harmony rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HarmonySet(Vec<HslColor>);

impl HarmonySet {
    /// Number of colors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds no colors (never produced by this module).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colors in display order.
    #[must_use]
    pub fn colors(&self) -> &[HslColor] {
        &self.0
    }

    /// Iterates over the colors in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, HslColor> {
        self.0.iter()
    }

    /// Color at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HslColor> {
        self.0.get(index)
    }

    /// Swatches (HSL, RGB and hex) for every color, in order.
    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        self.0.iter().copied().map(Swatch::from_hsl).collect()
    }
}

impl<'a> IntoIterator for &'a HarmonySet {
    type Item = &'a HslColor;
    type IntoIter = std::slice::Iter<'a, HslColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Hue offsets for a kind.
///
/// Monochromatic is not offset based and reports `[0]`: the single hue that
/// all of its colors share.
#[must_use]
pub fn harmony_offsets(kind: HarmonyKind) -> &'static [f64] {
    match kind.recipe() {
        HarmonyRecipe::HueOffsets(offsets) => offsets,
        HarmonyRecipe::Tonal(_) => IDENTITY_OFFSETS,
    }
}

/// Hue offsets for a harmony name; unknown names yield [`IDENTITY_OFFSETS`].
#[must_use]
pub fn harmony_offsets_by_name(name: &str) -> &'static [f64] {
    match name.parse::<HarmonyKind>() {
        Ok(kind) => harmony_offsets(kind),
        Err(err) => {
            tracing::warn!("{err}; using the base color only");
            IDENTITY_OFFSETS
        }
    }
}

/// Derives the harmony set of `base` for `kind`.
///
/// The output is a pure function of its inputs and its order is stable.
///
/// # Examples
///
/// ```
/// use chromawheel::models::{derive_harmony, HarmonyKind, HslColor};
///
/// let set = derive_harmony(HslColor::new(0.0, 50.0, 50.0), HarmonyKind::Triadic);
/// let hues: Vec<f64> = set.iter().map(HslColor::hue).collect();
/// assert_eq!(hues, vec![0.0, 120.0, 240.0]);
/// ```
#[must_use]
pub fn derive_harmony(base: HslColor, kind: HarmonyKind) -> HarmonySet {
    match kind.recipe() {
        HarmonyRecipe::HueOffsets(offsets) => rotate(base, offsets),
        HarmonyRecipe::Tonal(steps) => HarmonySet(
            steps
                .iter()
                .map(|step| {
                    HslColor::new(
                        base.hue(),
                        step.saturation.apply(base.saturation()),
                        step.lightness.apply(base.lightness()),
                    )
                })
                .collect(),
        ),
    }
}

/// Derives a harmony set from a harmony name.
///
/// Unknown names fall back to a single-color set holding `base`.
#[must_use]
pub fn derive_harmony_by_name(base: HslColor, name: &str) -> HarmonySet {
    match name.parse::<HarmonyKind>() {
        Ok(kind) => derive_harmony(base, kind),
        Err(err) => {
            tracing::warn!("{err}; using the base color only");
            rotate(base, IDENTITY_OFFSETS)
        }
    }
}

fn rotate(base: HslColor, offsets: &[f64]) -> HarmonySet {
    HarmonySet(
        offsets
            .iter()
            .map(|offset| base.with_hue(normalize_hue(base.hue() + offset)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hues(set: &HarmonySet) -> Vec<f64> {
        set.iter().map(HslColor::hue).collect()
    }

    #[test]
    fn test_offsets_table() {
        assert_eq!(harmony_offsets(HarmonyKind::Analogous), &[-30.0, 0.0, 30.0]);
        assert_eq!(harmony_offsets(HarmonyKind::Complementary), &[0.0, 180.0]);
        assert_eq!(harmony_offsets(HarmonyKind::Triadic), &[0.0, 120.0, 240.0]);
        assert_eq!(harmony_offsets(HarmonyKind::SplitComplementary), &[0.0, 150.0, 210.0]);
        assert_eq!(harmony_offsets(HarmonyKind::Tetradic), &[0.0, 90.0, 180.0, 270.0]);
        assert_eq!(harmony_offsets(HarmonyKind::Monochromatic), &[0.0]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_identity() {
        assert_eq!(harmony_offsets_by_name("pentadic"), IDENTITY_OFFSETS);
        assert_eq!(harmony_offsets_by_name(""), IDENTITY_OFFSETS);

        let base = HslColor::new(42.0, 60.0, 40.0);
        let set = derive_harmony_by_name(base, "pentadic");
        assert_eq!(set.colors(), &[base]);

        // Same fallback every time
        assert_eq!(derive_harmony_by_name(base, "pentadic"), set);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("analogous".parse(), Ok(HarmonyKind::Analogous));
        assert_eq!("Split-Complementary".parse(), Ok(HarmonyKind::SplitComplementary));
        assert_eq!("split_complementary".parse(), Ok(HarmonyKind::SplitComplementary));
        assert_eq!("splitcomplementary".parse(), Ok(HarmonyKind::SplitComplementary));
        assert_eq!(" TETRADIC ".parse(), Ok(HarmonyKind::Tetradic));
        assert!("square".parse::<HarmonyKind>().is_err());

        for kind in HarmonyKind::ALL {
            assert_eq!(kind.name().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_cardinality() {
        let base = HslColor::new(200.0, 70.0, 50.0);
        let expected = [
            (HarmonyKind::Analogous, 3),
            (HarmonyKind::Complementary, 2),
            (HarmonyKind::Triadic, 3),
            (HarmonyKind::SplitComplementary, 3),
            (HarmonyKind::Tetradic, 4),
            (HarmonyKind::Monochromatic, 5),
        ];
        for (kind, count) in expected {
            assert_eq!(derive_harmony(base, kind).len(), count, "{kind}");
            assert_eq!(kind.color_count(), count, "{kind}");
        }
    }

    #[test]
    fn test_triadic_example() {
        let set = derive_harmony(HslColor::new(0.0, 50.0, 50.0), HarmonyKind::Triadic);
        assert_eq!(
            set.colors(),
            &[
                HslColor::new(0.0, 50.0, 50.0),
                HslColor::new(120.0, 50.0, 50.0),
                HslColor::new(240.0, 50.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        let set = derive_harmony(HslColor::new(10.0, 80.0, 40.0), HarmonyKind::Analogous);
        assert_eq!(hues(&set), vec![340.0, 10.0, 40.0]);
    }

    #[test]
    fn test_complementary_symmetry() {
        for hue in [0.0, 45.5, 179.0, 180.0, 270.25, 359.0, -60.0, 725.0] {
            let set = derive_harmony(HslColor::new(hue, 50.0, 50.0), HarmonyKind::Complementary);
            let expected = normalize_hue(hue + 180.0);
            assert_eq!(set.colors()[1].hue(), expected);
        }
    }

    #[test]
    fn test_hues_always_normalized() {
        for hue in [-720.0, -361.0, -30.0, 0.0, 359.999, 360.0, 1000.0] {
            for kind in HarmonyKind::ALL {
                let set = derive_harmony(HslColor::new(hue, 50.0, 50.0), kind);
                for color in &set {
                    assert!((0.0..360.0).contains(&color.hue()), "{kind} at {hue}");
                }
            }
        }
    }

    #[test]
    fn test_saturation_lightness_preserved_by_offsets() {
        let base = HslColor::new(300.0, 33.0, 66.0);
        let set = derive_harmony(base, HarmonyKind::Tetradic);
        for color in &set {
            assert_eq!(color.saturation(), 33.0);
            assert_eq!(color.lightness(), 66.0);
        }
        assert_eq!(hues(&set), vec![300.0, 30.0, 120.0, 210.0]);
    }

    #[test]
    fn test_monochromatic_recipe_order() {
        let set = derive_harmony(HslColor::new(210.0, 60.0, 50.0), HarmonyKind::Monochromatic);
        let sl: Vec<(f64, f64)> = set
            .iter()
            .map(|c| (c.saturation(), c.lightness()))
            .collect();
        assert_eq!(
            sl,
            vec![(60.0, 50.0), (60.0, 20.0), (30.0, 50.0), (60.0, 80.0), (90.0, 50.0)]
        );
        assert!(set.iter().all(|c| c.hue() == 210.0));
    }

    #[test]
    fn test_monochromatic_clamps() {
        let set = derive_harmony(HslColor::new(15.0, 90.0, 70.0), HarmonyKind::Monochromatic);
        for color in &set {
            assert!(color.saturation() <= 100.0);
            assert!(color.lightness() >= 20.0 && color.lightness() <= 80.0);
        }
        assert_eq!(set.colors()[4].saturation(), 100.0);
        assert_eq!(set.colors()[3].lightness(), 80.0);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let base = HslColor::new(123.4, 56.7, 45.6);
        for kind in HarmonyKind::ALL {
            assert_eq!(derive_harmony(base, kind), derive_harmony(base, kind));
        }
    }

    #[test]
    fn test_cycle_kinds() {
        assert_eq!(HarmonyKind::Analogous.next(), HarmonyKind::Complementary);
        assert_eq!(HarmonyKind::Monochromatic.next(), HarmonyKind::Analogous);
        assert_eq!(HarmonyKind::Analogous.previous(), HarmonyKind::Monochromatic);
        for kind in HarmonyKind::ALL {
            assert_eq!(kind.next().previous(), kind);
        }
    }
}
