//! Parsed-document types shared by the scanner backends and the tag rules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One parsed text, valid for the lifetime of a single request.
///
/// Field names follow the parse server's JSON (`ents`, `tokens`), so the
/// wire shape deserializes straight into this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "ents", default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// A labeled entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// A single token's surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
}

/// Entity label set of the underlying parser.
///
/// Labels the tag rules never touch still deserialize (and anything the
/// parser invents lands on `Other`) so a vocabulary drift on the parse
/// server cannot fail a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Org,
    Event,
    WorkOfArt,
    Gpe,
    Loc,
    Norp,
    Fac,
    Product,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
    Other,
}

impl EntityLabel {
    /// Map a parser label string onto the known set.
    pub fn from_wire(label: &str) -> Self {
        match label {
            "PERSON" => Self::Person,
            "ORG" => Self::Org,
            "EVENT" => Self::Event,
            "WORK_OF_ART" => Self::WorkOfArt,
            "GPE" => Self::Gpe,
            "LOC" => Self::Loc,
            "NORP" => Self::Norp,
            "FAC" => Self::Fac,
            "PRODUCT" => Self::Product,
            "LAW" => Self::Law,
            "LANGUAGE" => Self::Language,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "PERCENT" => Self::Percent,
            "MONEY" => Self::Money,
            "QUANTITY" => Self::Quantity,
            "ORDINAL" => Self::Ordinal,
            "CARDINAL" => Self::Cardinal,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Event => "EVENT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Product => "PRODUCT",
            Self::Law => "LAW",
            Self::Language => "LANGUAGE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Percent => "PERCENT",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
            Self::Other => "OTHER",
        }
    }

    /// Labels collected into the Topics tag set.
    pub fn is_topic(self) -> bool {
        matches!(self, Self::Org | Self::Event | Self::WorkOfArt)
    }

    /// Labels collected into the People tag set.
    pub fn is_person(self) -> bool {
        matches!(self, Self::Person)
    }

    /// Labels collected into the Places tag set.
    pub fn is_place(self) -> bool {
        matches!(self, Self::Gpe | Self::Loc)
    }
}

impl Serialize for EntityLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_deserialize_from_parser_names() {
        let entity: Entity =
            serde_json::from_str(r#"{"text": "Ada Lovelace", "label": "PERSON"}"#).unwrap();
        assert_eq!(entity.label, EntityLabel::Person);

        let entity: Entity =
            serde_json::from_str(r#"{"text": "Hamlet", "label": "WORK_OF_ART"}"#).unwrap();
        assert_eq!(entity.label, EntityLabel::WorkOfArt);

        let entity: Entity = serde_json::from_str(r#"{"text": "Paris", "label": "GPE"}"#).unwrap();
        assert_eq!(entity.label, EntityLabel::Gpe);
    }

    #[test]
    fn unknown_label_falls_back_to_other() {
        let entity: Entity =
            serde_json::from_str(r#"{"text": "x", "label": "BRAND_NEW_LABEL"}"#).unwrap();
        assert_eq!(entity.label, EntityLabel::Other);
        assert!(!entity.label.is_topic());
        assert!(!entity.label.is_person());
        assert!(!entity.label.is_place());
    }

    #[test]
    fn wire_names_round_trip() {
        for label in [
            EntityLabel::Person,
            EntityLabel::WorkOfArt,
            EntityLabel::Gpe,
            EntityLabel::Cardinal,
        ] {
            assert_eq!(EntityLabel::from_wire(label.as_str()), label);
        }
    }

    #[test]
    fn label_category_membership() {
        assert!(EntityLabel::Org.is_topic());
        assert!(EntityLabel::Event.is_topic());
        assert!(EntityLabel::WorkOfArt.is_topic());
        assert!(EntityLabel::Person.is_person());
        assert!(EntityLabel::Gpe.is_place());
        assert!(EntityLabel::Loc.is_place());

        assert!(!EntityLabel::Person.is_topic());
        assert!(!EntityLabel::Date.is_place());
        assert!(!EntityLabel::Cardinal.is_person());
    }

    #[test]
    fn document_deserializes_from_wire_shape() {
        let doc: Document = serde_json::from_str(
            r#"{
                "ents": [{"text": "Paris", "label": "GPE"}],
                "tokens": [{"text": "Paris"}, {"text": "is"}, {"text": "great"}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.entities.len(), 1);
        assert_eq!(doc.tokens.len(), 3);
        assert_eq!(doc.tokens[1].text, "is");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.tokens.is_empty());
    }
}
