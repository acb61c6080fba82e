//! Meter status / error-flag registers.
//!
//! Several drivers extract an error-flag word (VIF 0xFD17 on evo868,
//! 0xFF23 on flowiq2200, 0xFD971D on munia). The bit assignments are
//! manufacturer-specific and mostly undocumented, so the word is kept
//! opaque: all bits clear means the meter reports OK.

use std::fmt;

/// Raw error-flag word from a status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorFlags(pub u32);

impl ErrorFlags {
    /// Builds the flags from a decoded register value. Status registers are
    /// at most 32 bits wide; anything beyond that is truncated.
    pub fn from_value(value: f64) -> Self {
        ErrorFlags(value as u32)
    }

    /// True when no error bit is set.
    pub fn is_ok(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "OK")
        } else {
            write!(f, "ERROR_FLAGS(0x{:08X})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_flags_are_ok() {
        let flags = ErrorFlags::from_value(0.0);
        assert!(flags.is_ok());
        assert_eq!(flags.to_string(), "OK");
    }

    #[test]
    fn test_set_bits_report_error() {
        let flags = ErrorFlags::from_value(0x0110 as f64);
        assert!(!flags.is_ok());
        assert_eq!(flags.to_string(), "ERROR_FLAGS(0x00000110)");
    }
}
