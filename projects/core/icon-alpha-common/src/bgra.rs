//! BGRA8888 pixel layout.
//!
//! Pixels are stored interleaved, 4 bytes each, in the following order:
//!
//! ```ignore
//! Offset | Size | Description
//! -------|------|------------
//! 0      | 1    | blue
//! 1      | 1    | green
//! 2      | 1    | red
//! 3      | 1    | alpha (0 = transparent, 255 = opaque)
//! ```
//!
//! When a pixel is read as a little-endian [`u32`], alpha lands in the top byte, which is
//! what [`ALPHA_MASK`] and [`COLOR_MASK`] select.

/// Number of bytes in a single BGRA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset of the alpha byte within a pixel.
pub const ALPHA_OFFSET: usize = 3;

/// Selects the alpha channel of a pixel read as a little-endian [`u32`].
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Selects the blue, green and red channels of a pixel read as a little-endian [`u32`].
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// Alpha value of a fully opaque pixel.
pub const ALPHA_OPAQUE: u8 = 0xFF;

/// Alpha value of a fully transparent pixel.
pub const ALPHA_TRANSPARENT: u8 = 0x00;

/// Represents a single BGRA8888 pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bgra8888 {
    /// Blue component (0-255)
    pub b: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Red component (0-255)
    pub r: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Bgra8888 {
    /// Constructs a new [`Bgra8888`] from the specified blue, green, red, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_alpha_common::bgra::Bgra8888;
    ///
    /// let pixel = Bgra8888::new(0x10, 0x20, 0x30, 0xFF);
    /// assert_eq!(pixel.b, 0x10);
    /// assert_eq!(pixel.a, 0xFF);
    /// ```
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Builds a pixel from its little-endian [`u32`] representation.
    #[inline]
    pub const fn from_le_u32(value: u32) -> Self {
        let [b, g, r, a] = value.to_le_bytes();
        Self { b, g, r, a }
    }

    /// Returns the little-endian [`u32`] representation of this pixel.
    #[inline]
    pub const fn to_le_u32(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }

    /// Builds a pixel from 4 bytes in memory order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the 4 bytes of this pixel in memory order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.b, self.g, self.r, self.a]
    }

    /// Returns `true` if this pixel, read as a mask entry, is black.
    ///
    /// Only blue, green and red are considered; the alpha byte of a mask entry is ignored.
    #[inline]
    pub const fn is_black_mask(self) -> bool {
        (self.b | self.g | self.r) == 0
    }

    /// Returns a copy of this pixel with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}
