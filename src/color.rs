// Simple HSL color, rendered as a CSS color string for the canvas context

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl Color {
    pub const SATURATION: u8 = 70;
    pub const LIGHTNESS: u8 = 60;

    pub fn from_hue(hue: f64) -> Color {
        Color {
            hue,
            saturation: Color::SATURATION,
            lightness: Color::LIGHTNESS,
        }
    }

    // Picks a hue uniformly in [min_hue, max_hue)
    pub fn random_in_band<R: Rng + ?Sized>(rng: &mut R, min_hue: f64, max_hue: f64) -> Color {
        Color::from_hue(rng.gen::<f64>() * (max_hue - min_hue) + min_hue)
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn css_string_uses_fixed_saturation_and_lightness() {
        assert_eq!(Color::from_hue(200.0).to_css(), "hsl(200, 70%, 60%)");
        assert_eq!(Color::from_hue(187.5).to_css(), "hsl(187.5, 70%, 60%)");
    }

    #[test]
    fn random_hue_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = Color::random_in_band(&mut rng, 180.0, 240.0);
            assert!(c.hue >= 180.0 && c.hue < 240.0, "hue {}", c.hue);
        }
    }
}
