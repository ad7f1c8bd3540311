//! Macro for implementing Display and FromStr for wire enums
//!
//! Server enums travel as fixed strings (`"student"`, `"8-4-4"`, ...). The
//! same strings are needed for serde, for query parameters, and for display
//! in pages, so one macro keeps the three in sync.
//!
//! # Example
//!
//! ```rust
//! use smartpath_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Term {
//!     First,
//!     Second,
//! }
//!
//! impl_wire_enum_conversions!(Term {
//!     First => "term-1",
//!     Second => "term-2",
//! });
//!
//! assert_eq!(Term::First.as_str(), "term-1");
//! assert_eq!("TERM-2".parse::<Term>(), Ok(Term::Second));
//! ```

/// Implements `as_str`, Display and FromStr for wire enums
///
/// Parsing is ASCII case-insensitive; display always uses the canonical
/// wire string.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire representation
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Easy,
        Hard,
        EightFourFour,
    }

    impl_wire_enum_conversions!(Level {
        Easy => "easy",
        Hard => "hard",
        EightFourFour => "8-4-4",
    });

    #[test]
    fn test_display_uses_wire_string() {
        assert_eq!(Level::Easy.to_string(), "easy");
        assert_eq!(Level::EightFourFour.to_string(), "8-4-4");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(Level::from_str("HARD").unwrap(), Level::Hard);
        assert_eq!(Level::from_str("Easy").unwrap(), Level::Easy);
        assert_eq!(Level::from_str("8-4-4").unwrap(), Level::EightFourFour);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = Level::from_str("medium");
        assert!(result.unwrap_err().contains("Invalid Level: medium"));
        assert!(Level::from_str("").is_err());
    }
}
