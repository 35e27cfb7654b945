use std::fmt::Write;
use std::time::Duration;

use crate::catalog::AccentColor;

pub const CARD_ENTRANCE: Duration = Duration::from_millis(700);
pub const ICON_FLOAT_PERIOD: Duration = Duration::from_millis(3000);
pub const ICON_FLOAT_RISE_PX: u32 = 10;
pub const HOVER_TRANSITION: Duration = Duration::from_millis(500);
// Overshoots slightly, close to a spring with stiffness 100 / damping 15.
pub const HOVER_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    L50,
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
}

impl Shade {
    pub const ALL: [Shade; 8] = [
        Shade::L50,
        Shade::L100,
        Shade::L200,
        Shade::L300,
        Shade::L400,
        Shade::L500,
        Shade::L600,
        Shade::L700,
    ];

    pub fn weight(self) -> u16 {
        match self {
            Shade::L50 => 50,
            Shade::L100 => 100,
            Shade::L200 => 200,
            Shade::L300 => 300,
            Shade::L400 => 400,
            Shade::L500 => 500,
            Shade::L600 => 600,
            Shade::L700 => 700,
        }
    }
}

impl AccentColor {
    pub fn token(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Green => "green",
            AccentColor::Cyan => "cyan",
            AccentColor::Pink => "pink",
            AccentColor::Purple => "purple",
            AccentColor::Teal => "teal",
        }
    }

    fn palette(self) -> [&'static str; 8] {
        match self {
            AccentColor::Blue => [
                "#ebf8ff", "#bee3f8", "#90cdf4", "#63b3ed", "#4299e1", "#3182ce", "#2b6cb0", "#2c5282",
            ],
            AccentColor::Green => [
                "#f0fff4", "#c6f6d5", "#9ae6b4", "#68d391", "#48bb78", "#38a169", "#2f855a", "#276749",
            ],
            AccentColor::Cyan => [
                "#edfdfd", "#c4f1f9", "#9decf9", "#76e4f7", "#0bc5ea", "#00b5d8", "#00a3c4", "#0987a0",
            ],
            AccentColor::Pink => [
                "#fff5f7", "#fed7e2", "#fbb6ce", "#f687b3", "#ed64a6", "#d53f8c", "#b83280", "#97266d",
            ],
            AccentColor::Purple => [
                "#faf5ff", "#e9d8fd", "#d6bcfa", "#b794f4", "#9f7aea", "#805ad5", "#6b46c1", "#553c9a",
            ],
            AccentColor::Teal => [
                "#e6fffa", "#b2f5ea", "#81e6d9", "#4fd1c5", "#38b2ac", "#319795", "#2c7a7b", "#285e61",
            ],
        }
    }

    pub fn shade(self, shade: Shade) -> &'static str {
        self.palette()[shade as usize]
    }

    /// Inline custom properties (`--accent-50` .. `--accent-700`) read by the card stylesheet.
    pub fn css_vars(self) -> String {
        let mut vars = String::new();
        for shade in Shade::ALL {
            let _ = write!(vars, "--accent-{}: {}; ", shade.weight(), self.shade(shade));
        }
        vars
    }
}

/// Motion timings exposed to the stylesheet as custom properties on the page root.
pub fn motion_vars() -> String {
    format!(
        "--card-enter-duration: {}ms; --float-period: {}ms; --float-rise: -{}px; \
         --hover-duration: {}ms; --hover-easing: {};",
        CARD_ENTRANCE.as_millis(),
        ICON_FLOAT_PERIOD.as_millis(),
        ICON_FLOAT_RISE_PX,
        HOVER_TRANSITION.as_millis(),
        HOVER_EASING,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENTS: [AccentColor; 6] = [
        AccentColor::Blue,
        AccentColor::Green,
        AccentColor::Cyan,
        AccentColor::Pink,
        AccentColor::Purple,
        AccentColor::Teal,
    ];

    #[test]
    fn shades_are_hex_colors() {
        for accent in ACCENTS {
            for shade in Shade::ALL {
                let hex = accent.shade(shade);
                assert_eq!(hex.len(), 7, "{} {}", accent.token(), shade.weight());
                assert!(hex.starts_with('#'));
                assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn accents_differ_at_mid_shade() {
        let mut mids: Vec<&str> = ACCENTS.iter().map(|a| a.shade(Shade::L500)).collect();
        mids.sort_unstable();
        mids.dedup();
        assert_eq!(mids.len(), ACCENTS.len());
    }

    #[test]
    fn css_vars_cover_every_shade() {
        let vars = AccentColor::Blue.css_vars();
        for shade in Shade::ALL {
            assert!(vars.contains(&format!("--accent-{}:", shade.weight())));
        }
        assert!(vars.contains("--accent-500: #3182ce;"));
    }

    #[test]
    fn motion_vars_use_millis() {
        let vars = motion_vars();
        assert!(vars.contains("--card-enter-duration: 700ms;"));
        assert!(vars.contains("--float-period: 3000ms;"));
        assert!(vars.contains("--float-rise: -10px;"));
    }
}
