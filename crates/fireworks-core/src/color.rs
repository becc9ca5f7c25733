use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Flat 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

    /// Build a colour from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

}

/// CSS colour string (`#rrggbb`) for canvas fill/shadow styles.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const PRIMARY_PALETTE: [Rgb; 12] = [
    Rgb::from_hex(0xff0000), // red
    Rgb::from_hex(0xff4500), // orange red
    Rgb::from_hex(0xffd700), // gold
    Rgb::from_hex(0x00ff00), // green
    Rgb::from_hex(0x00ffff), // cyan
    Rgb::from_hex(0x0080ff), // blue
    Rgb::from_hex(0xff00ff), // magenta
    Rgb::from_hex(0xff1493), // deep pink
    Rgb::from_hex(0xffffff), // white
    Rgb::from_hex(0xff69b4), // hot pink
    Rgb::from_hex(0x00ff7f), // spring green
    Rgb::from_hex(0xff6347), // tomato
];

// Not derived from the primary colour; any of these goes with any primary.
pub const ACCENT_PALETTE: [Rgb; 5] = [
    Rgb::from_hex(0xffff00),
    Rgb::from_hex(0xff8c00),
    Rgb::from_hex(0xff00ff),
    Rgb::from_hex(0x00ffff),
    Rgb::from_hex(0xffffff),
];

#[inline]
pub fn pick_primary<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    *PRIMARY_PALETTE.choose(rng).unwrap_or(&Rgb::WHITE)
}

/// Accent colour paired with `primary`. The choice ignores `primary`.
#[inline]
pub fn pick_accent<R: Rng + ?Sized>(_primary: Rgb, rng: &mut R) -> Rgb {
    *ACCENT_PALETTE.choose(rng).unwrap_or(&Rgb::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn css_is_lowercase_hex() {
        assert_eq!(Rgb::from_hex(0xff4500).to_string(), "#ff4500");
        assert_eq!(Rgb::from_hex(0x0080ff).to_string(), "#0080ff");
        assert_eq!(Rgb::from_hex(0x000000).to_string(), "#000000");
    }

    #[test]
    fn from_hex_splits_channels() {
        let c = Rgb::from_hex(0x12abef);
        assert_eq!((c.r, c.g, c.b), (0x12, 0xab, 0xef));
    }

    #[test]
    fn pickers_stay_inside_their_palettes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = pick_primary(&mut rng);
            assert!(PRIMARY_PALETTE.contains(&p));
            assert!(ACCENT_PALETTE.contains(&pick_accent(p, &mut rng)));
        }
    }

    #[test]
    fn pickers_reach_every_entry() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(pick_primary(&mut rng));
        }
        assert_eq!(seen.len(), PRIMARY_PALETTE.len());
    }
}
