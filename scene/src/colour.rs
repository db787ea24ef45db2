use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Colour(pub [f32; 4]);

impl Colour {
    pub const WHITE: Colour = Colour([1.0, 1.0, 1.0, 1.0]);
    pub const BACKGROUND: Colour = Colour([0.15, 0.15, 0.7, 1.0]);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour([r, g, b, 1.0])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }

    pub fn raw(self) -> [f32; 4] {
        self.0
    }

    /// Darken the colour channels by `factor`, leaving alpha untouched.
    #[must_use]
    pub fn shaded(self, factor: f32) -> Self {
        Colour([
            self.r() * factor,
            self.g() * factor,
            self.b() * factor,
            self.a(),
        ])
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.0[3] = opacity;
        self
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

#[cfg(test)]
mod test {
    use super::Colour;

    #[test]
    fn test_shading_keeps_alpha() {
        let colour = Colour([1.0, 0.5, 0.25, 0.5]).shaded(0.8);
        assert_eq!(colour, Colour([0.8, 0.4, 0.2, 0.5]));
    }
}
