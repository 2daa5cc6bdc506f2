//! Light and dark presentation variants.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Presentation mode applied uniformly to every decorated block.
///
/// The variant never influences parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Variant {
    #[default]
    Light,
    Dark,
}

/// Color and background classes attached to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub text: &'static str,
    pub background: Option<&'static str>,
}

impl Decoration {
    /// Joins background and text classes into one attribute value.
    pub fn classes(&self) -> String {
        match self.background {
            Some(bg) => format!("{} {}", bg, self.text),
            None => self.text.to_string(),
        }
    }
}

impl Variant {
    pub fn is_dark(self) -> bool {
        self == Variant::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }

    pub fn code_block(self) -> Decoration {
        match self {
            Variant::Dark => Decoration {
                text: "text-white",
                background: Some("bg-white/10"),
            },
            Variant::Light => Decoration {
                text: "text-slate-100",
                background: Some("bg-slate-900"),
            },
        }
    }

    pub fn heading(self) -> Decoration {
        Decoration {
            text: match self {
                Variant::Dark => "text-white",
                Variant::Light => "text-slate-900",
            },
            background: None,
        }
    }

    pub fn paragraph(self) -> Decoration {
        Decoration {
            text: match self {
                Variant::Dark => "text-white",
                Variant::Light => "text-slate-800",
            },
            background: None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for variant names other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Variant::Light),
            "dark" => Ok(Variant::Dark),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}
