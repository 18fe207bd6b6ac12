//! Shared constants for point encoding

/// Leading byte of an uncompressed point: `0x04 || x || y`
pub const UNCOMPRESSED_POINT_FLAG: u8 = 0x04;

/// Leading byte of a compressed point with even y
pub const COMPRESSED_POINT_FLAG_EVEN: u8 = 0x02;

/// Leading byte of a compressed point with odd y
pub const COMPRESSED_POINT_FLAG_ODD: u8 = 0x03;

/// Single-byte encoding of the point at infinity
pub const INFINITY_FLAG: u8 = 0x00;
