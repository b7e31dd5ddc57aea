/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants, including the utility's report palette
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const GREY: Colour = Colour::Grey { g: 0.4314 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.7843 };

    /// Banner and title bar blue
    pub const WATER_BLUE: Colour = Colour::RGB {
        r: 0.0000,
        g: 0.3686,
        b: 0.6078,
    };
    /// Section title bar tint
    pub const PALE_BLUE: Colour = Colour::RGB {
        r: 0.8824,
        g: 0.9333,
        b: 0.9725,
    };
    /// Box borders
    pub const STEEL: Colour = Colour::RGB {
        r: 0.5882,
        g: 0.6667,
        b: 0.7451,
    };
    /// Badge chip fill
    pub const AMBER: Colour = Colour::RGB {
        r: 1.0000,
        g: 0.9255,
        b: 0.8000,
    };
    /// Badge chip text
    pub const DARK_AMBER: Colour = Colour::RGB {
        r: 0.5412,
        g: 0.3137,
        b: 0.0000,
    };
}
