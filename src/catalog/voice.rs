use serde::Serialize;

/// What a cataloged file contains.
///
/// The scanner only ever produces [`VoiceType::Embeddings`]; `.wav` source
/// audio is used to generate embeddings and is never listed. `Audio` stays
/// in the enum because consumers read the field as `embeddings | audio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Embeddings,
    Audio,
}

/// Display/sort grouping derived from the filename prefix.
///
/// `Other` is part of the wire contract but the prefix rule never yields
/// it: anything outside the four fixed prefixes is a custom voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceCategory {
    Custom,
    NaturalFemale,
    NaturalMale,
    VarietyFemale,
    VarietyMale,
    Other,
}

impl VoiceCategory {
    /// Classify a voice filename by the prefix of its stem.
    pub fn from_filename(name: &str) -> Self {
        let stem = name.strip_suffix(".pt").unwrap_or(name);

        if stem.starts_with("NATF") {
            VoiceCategory::NaturalFemale
        } else if stem.starts_with("NATM") {
            VoiceCategory::NaturalMale
        } else if stem.starts_with("VARF") {
            VoiceCategory::VarietyFemale
        } else if stem.starts_with("VARM") {
            VoiceCategory::VarietyMale
        } else {
            VoiceCategory::Custom
        }
    }

    /// Primary sort key: custom voices first, then the fixed prefix
    /// groups, anything else last.
    pub fn sort_rank(self) -> u8 {
        match self {
            VoiceCategory::Custom => 0,
            VoiceCategory::NaturalFemale => 1,
            VoiceCategory::NaturalMale => 2,
            VoiceCategory::VarietyFemale => 3,
            VoiceCategory::VarietyMale => 4,
            VoiceCategory::Other => 99,
        }
    }
}

/// One discovered voice embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    /// Filename including extension, unique within one listing.
    pub name: String,
    #[serde(rename = "type")]
    pub voice_type: VoiceType,
    pub category: VoiceCategory,
    /// Path as discovered, not normalized.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_natural_prefixes() {
        assert_eq!(
            VoiceCategory::from_filename("NATF_amy.pt"),
            VoiceCategory::NaturalFemale
        );
        assert_eq!(
            VoiceCategory::from_filename("NATM_ben.pt"),
            VoiceCategory::NaturalMale
        );
    }

    #[test]
    fn classifies_variety_prefixes() {
        assert_eq!(
            VoiceCategory::from_filename("VARF_01.pt"),
            VoiceCategory::VarietyFemale
        );
        assert_eq!(
            VoiceCategory::from_filename("VARM_01.pt"),
            VoiceCategory::VarietyMale
        );
    }

    #[test]
    fn unmatched_prefix_is_custom() {
        assert_eq!(
            VoiceCategory::from_filename("my_voice.pt"),
            VoiceCategory::Custom
        );
        assert_eq!(
            VoiceCategory::from_filename("natf_lowercase.pt"),
            VoiceCategory::Custom
        );
        assert_eq!(VoiceCategory::from_filename("NAT.pt"), VoiceCategory::Custom);
    }

    #[test]
    fn classification_works_without_extension() {
        assert_eq!(
            VoiceCategory::from_filename("VARM_raw"),
            VoiceCategory::VarietyMale
        );
    }

    #[test]
    fn custom_ranks_before_prefix_groups() {
        assert!(VoiceCategory::Custom.sort_rank() < VoiceCategory::NaturalFemale.sort_rank());
        assert!(VoiceCategory::NaturalFemale.sort_rank() < VoiceCategory::NaturalMale.sort_rank());
        assert!(VoiceCategory::VarietyMale.sort_rank() < VoiceCategory::Other.sort_rank());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let voice = VoiceInfo {
            name: "NATF_amy.pt".to_string(),
            voice_type: VoiceType::Embeddings,
            category: VoiceCategory::NaturalFemale,
            path: "/voices/NATF_amy.pt".to_string(),
        };

        let json = serde_json::to_value(&voice).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "NATF_amy.pt",
                "type": "embeddings",
                "category": "natural-female",
                "path": "/voices/NATF_amy.pt"
            })
        );
    }
}
