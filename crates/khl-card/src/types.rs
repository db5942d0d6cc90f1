//! Keyword enums shared by cards, modules and accessories.
//!
//! Each keyword serializes to its lowercase wire form and parses back from it
//! (case-insensitively), so string arguments are checked at the boundary and
//! never stored unresolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, reject};

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(reject(ValidationError::unknown($kind, s))),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

keyword_enum! {
    /// Visual style of a card or button.
    Theme, "theme", default = Primary {
        Primary => "primary",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
        Info => "info",
        Secondary => "secondary",
        None => "none",
    }
}

keyword_enum! {
    /// Card width. Mobile clients always render `sm`.
    Size, "size", default = Lg {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
}

keyword_enum! {
    ImageSize, "image size", default = Lg {
        Sm => "sm",
        Lg => "lg",
    }
}

keyword_enum! {
    /// Which side of a section its accessory sits on.
    SectionMode, "section mode", default = Right {
        Left => "left",
        Right => "right",
    }
}

keyword_enum! {
    CountdownMode, "countdown mode", default = Day {
        Day => "day",
        Hour => "hour",
        Second => "second",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_strings() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().expect("theme"), *theme);
        }
        for size in Size::ALL {
            assert_eq!(Size::try_from(size.to_string()).expect("size"), *size);
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" Danger ".parse::<Theme>().expect("theme"), Theme::Danger);
        assert_eq!("SECOND".parse::<CountdownMode>().expect("mode"), CountdownMode::Second);
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        assert_eq!(
            "week".parse::<CountdownMode>().unwrap_err(),
            ValidationError::unknown("countdown mode", "week")
        );
        assert!("xl".parse::<Size>().is_err());
        assert!("center".parse::<SectionMode>().is_err());
        assert!("md".parse::<ImageSize>().is_err());
    }

    #[test]
    fn defaults_match_platform() {
        assert_eq!(Theme::default(), Theme::Primary);
        assert_eq!(Size::default(), Size::Lg);
        assert_eq!(ImageSize::default(), ImageSize::Lg);
        assert_eq!(SectionMode::default(), SectionMode::Right);
    }

    #[test]
    fn serde_uses_wire_keywords() {
        assert_eq!(serde_json::to_value(Theme::None).expect("json"), "none");
        let size: Size = serde_json::from_str("\"xs\"").expect("size");
        assert_eq!(size, Size::Xs);
    }
}
