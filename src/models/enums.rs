use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(BodyZone {
    FullBody => "full_body",
    Heart => "heart",
    Liver => "liver",
    Gallbladder => "gallbladder",
    Kidney => "kidney",
    Lung => "lung",
    Stomach => "stomach",
    Intestine => "intestine",
    Pancreas => "pancreas",
    Spleen => "spleen",
    Thyroid => "thyroid",
    Blood => "blood",
    Vascular => "vascular",
    Immune => "immune",
    Bone => "bone",
    Urinary => "urinary",
    Reproductive => "reproductive",
    Eye => "eye",
});

str_enum!(Category {
    BloodRoutine => "blood_routine",
    UrineRoutine => "urine_routine",
    LiverFunction => "liver_function",
    KidneyFunction => "kidney_function",
    BloodLipid => "blood_lipid",
    BloodGlucose => "blood_glucose",
    ThyroidFunction => "thyroid_function",
    TumorMarker => "tumor_marker",
    Electrolyte => "electrolyte",
    Inflammation => "inflammation",
    Other => "other",
});

str_enum!(HealthStatus {
    Normal => "normal",
    High => "high",
    Low => "low",
    CriticalHigh => "critical_high",
    CriticalLow => "critical_low",
    Unknown => "unknown",
});

str_enum!(Confidence {
    High => "high",
    Medium => "medium",
    Low => "low",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Unspecified => "unspecified",
});

/// Result of classifying an indicator name into a body zone and category.
///
/// `Confidence::High` is reserved for callers that short-circuit
/// classification via an exact template name/alias match; the keyword
/// classifier itself only produces `Medium` (keyword hit) or `Low`
/// (defaults on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorClassification {
    pub body_zone: BodyZone,
    pub category: Category,
    pub confidence: Confidence,
}
