use serde::{Deserialize, Serialize};

/// Parse failure for a string-backed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Status {
    Normal => "normal",
    Low => "low",
    High => "high",
    Critical => "critical",
});

str_enum!(Category {
    Diabetes => "Diabetes",
    LipidPanel => "Lipid Panel",
    KidneyFunction => "Kidney Function",
    Electrolytes => "Electrolytes",
    Vitamins => "Vitamins",
    ThyroidFunction => "Thyroid Function",
    General => "General",
});
