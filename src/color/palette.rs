//! Textile palettes assigned to motifs and connectors
//!
//! Every palette holds five colors: slot 0 is the dominant fill and slots 1-4 are
//! accents used by the decorative drawing. Palettes are identified by their index in
//! the registry, so two palettes with equal colors are still distinct.

use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::RandomSelector;
use image::Rgba;

/// Number of colors in every palette
pub const PALETTE_SIZE: usize = 5;

/// Build an opaque color from a `0xRRGGBB` literal
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

/// Parse `#RRGGBB` or `RRGGBB` into an opaque color
///
/// # Errors
///
/// Returns an `InvalidParameter` error if the string is not six hex digits
pub fn parse_hex(text: &str) -> Result<Rgba<u8>> {
    let digits = text.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Err(invalid_parameter(
            "color",
            &text,
            &"expected six hex digits (#RRGGBB)",
        ));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| invalid_parameter("color", &text, &e))?;
    Ok(rgb(value))
}

/// Registry index of a palette, used as its identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteId(pub usize);

/// Ordered set of five colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Dominant fill followed by four accents
    pub colors: [Rgba<u8>; PALETTE_SIZE],
}

impl Palette {
    /// Build a palette from five `0xRRGGBB` literals
    pub const fn from_hex(hex: [u32; PALETTE_SIZE]) -> Self {
        Self {
            colors: [
                rgb(hex[0]),
                rgb(hex[1]),
                rgb(hex[2]),
                rgb(hex[3]),
                rgb(hex[4]),
            ],
        }
    }

    /// The fill color of the motif body
    pub const fn dominant(&self) -> Rgba<u8> {
        self.colors[0]
    }

    /// Accent color by slot, wrapping so any index is valid
    pub const fn accent(&self, slot: usize) -> Rgba<u8> {
        self.colors[slot % PALETTE_SIZE]
    }
}

// Six palettes after Pacita Abad's wheel paintings
const TEXTILE_PALETTES: [Palette; 6] = [
    Palette::from_hex([0x45_206A, 0xFF_D700, 0xFF_8C00, 0xB0_E0E6, 0x8A_2BE2]),
    Palette::from_hex([0xD9_0429, 0xF4_D35E, 0xF7_B267, 0x0A_796F, 0x2E_4057]),
    Palette::from_hex([0xA3_4A2A, 0xF2_AF29, 0xE0_A890, 0x3E_8914, 0xD4_327C]),
    Palette::from_hex([0x00_4C6D, 0x7F_C2BF, 0xFF_C94F, 0xD8_3A56, 0x5C_88BF]),
    Palette::from_hex([0xC1_1F68, 0xF9_E795, 0xF5_EEF8, 0x2E_CC71, 0x8E_44AD]),
    Palette::from_hex([0x00_6D77, 0xFF_8C00, 0xE2_9578, 0x83_C5BE, 0xD6_4045]),
];

/// Fixed, non-empty collection of palettes with seeded selection
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::textile()
    }
}

impl PaletteRegistry {
    /// The built-in textile palettes
    pub fn textile() -> Self {
        Self {
            palettes: TEXTILE_PALETTES.to_vec(),
        }
    }

    /// Create a registry from custom palettes
    ///
    /// # Errors
    ///
    /// Returns an error if no palettes are given
    pub fn new(palettes: Vec<Palette>) -> Result<Self> {
        if palettes.is_empty() {
            return Err(invalid_parameter(
                "palettes",
                &0,
                &"registry needs at least one palette",
            ));
        }
        Ok(Self { palettes })
    }

    /// Number of palettes
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Look up a palette by identity
    pub fn get(&self, id: PaletteId) -> Option<&Palette> {
        self.palettes.get(id.0)
    }

    /// Uniformly pick a palette
    pub fn pick(&self, selector: &mut RandomSelector) -> PaletteId {
        PaletteId(selector.index(self.len()))
    }

    /// Uniformly pick a palette, re-picking among the others when the draw repeats `previous`
    ///
    /// With a single palette the repeat is unavoidable and is returned as drawn.
    pub fn pick_after(
        &self,
        previous: Option<PaletteId>,
        selector: &mut RandomSelector,
    ) -> PaletteId {
        let picked = self.pick(selector);
        match previous {
            Some(prev) if prev == picked && self.len() > 1 => {
                PaletteId(selector.index_excluding(self.len(), picked.0))
            }
            _ => picked,
        }
    }

    /// Dominant color of a uniformly drawn palette
    pub fn random_dominant(&self, selector: &mut RandomSelector) -> Rgba<u8> {
        let id = self.pick(selector);
        self.get(id).map_or(Rgba([255, 255, 255, 255]), Palette::dominant)
    }
}
