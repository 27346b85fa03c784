use std::fmt;

/// RGB color representation.
///
/// Host engines usually exchange colors as a packed integer with the blue
/// component in the high byte (`0x00BBGGRR`); use [`RGBColor::to_bgr`] and
/// [`RGBColor::from_bgr`] at that boundary.
///
/// # Examples
///
/// ```rust
/// use slidewright::common::RGBColor;
///
/// let orange = RGBColor::new(255, 128, 0);
/// assert_eq!(orange.to_bgr(), 0x0080FF);
/// assert_eq!(RGBColor::from_bgr(0x0080FF), orange);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the host's `0x00BBGGRR` integer layout.
    #[inline]
    pub const fn to_bgr(self) -> i32 {
        ((self.b as i32) << 16) | ((self.g as i32) << 8) | self.r as i32
    }

    /// Unpack from the host's `0x00BBGGRR` integer layout. The high byte is ignored.
    #[inline]
    pub const fn from_bgr(packed: i32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
        }
    }

    /// Hex string without `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
