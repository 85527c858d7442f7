/// RGB cursor for the loading indicator.
///
/// [`Rgb::step`] walks the red→green→blue→red hue wheel in 5-unit channel
/// increments. The walk is deterministic and restartable from the anchor
/// `(255, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Starting point of the color cycle.
pub const COLOR_ANCHOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

impl Default for Rgb {
    fn default() -> Self {
        COLOR_ANCHOR
    }
}

impl Rgb {
    /// Advances one tick around the hue wheel.
    ///
    /// The six segment guards are checked in sequence on the updated
    /// channels, so a tick that lands exactly on a wheel corner also takes
    /// the first step of the next segment.
    pub fn step(self) -> Self {
        let Self { mut r, mut g, mut b } = self;

        if r == 255 && g != 255 && b == 0 {
            g += 5;
        }
        if r != 0 && g == 255 && b == 0 {
            r -= 5;
        }
        if r == 0 && g == 255 && b != 255 {
            b += 5;
        }
        if r == 0 && g != 0 && b == 255 {
            g -= 5;
        }
        if r != 255 && g == 0 && b == 255 {
            r += 5;
        }
        if r == 255 && g == 0 && b != 0 {
            b -= 5;
        }

        Self { r, g, b }
    }

    /// CSS `rgb(...)` rendering for display layers.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_leaves_the_anchor() {
        assert_eq!(COLOR_ANCHOR.step(), Rgb { r: 255, g: 5, b: 0 });
    }

    #[test]
    fn cycle_returns_to_anchor() {
        let mut color = COLOR_ANCHOR;
        let mut steps = 0u32;
        loop {
            color = color.step();
            steps += 1;
            assert!(steps <= 1000, "cycle never returned to anchor");
            if color == COLOR_ANCHOR {
                break;
            }
        }
        // 51 ticks for the first segment, 50 for each of the remaining five
        // (corner ticks double-step).
        assert_eq!(steps, 301);
    }

    #[test]
    fn channels_stay_on_the_five_unit_grid() {
        let mut color = COLOR_ANCHOR;
        for _ in 0..301 {
            color = color.step();
            assert_eq!(color.r % 5, 0);
            assert_eq!(color.g % 5, 0);
            assert_eq!(color.b % 5, 0);
        }
    }

    #[test]
    fn css_rendering() {
        assert_eq!(COLOR_ANCHOR.css(), "rgb(255, 0, 0)");
    }
}
