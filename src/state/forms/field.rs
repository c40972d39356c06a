//! Form field value objects

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The seven fields of the sign-up record, in display order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum FieldName {
    #[strum(serialize = "fullName")]
    FullName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "phoneNumber")]
    PhoneNumber,
    #[strum(serialize = "gender")]
    Gender,
    #[strum(serialize = "class")]
    Class,
    #[strum(serialize = "section")]
    Section,
    #[strum(serialize = "emergencyContact")]
    EmergencyContact,
}

impl FieldName {
    pub const COUNT: usize = 7;

    /// Wire key used in serialized records (e.g. `phoneNumber`)
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Human label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Gender => "Gender",
            FieldName::Class => "Class",
            FieldName::Section => "Section",
            FieldName::EmergencyContact => "Emergency Contact",
        }
    }

    /// Position of the field in display order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Whether the field is edited through a fixed option list rather than typing
    pub fn is_select(self) -> bool {
        matches!(self, FieldName::Gender)
    }
}

/// Options offered by the gender select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Next option, wrapping around
    pub fn next(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Other,
            Gender::Other => Gender::Male,
        }
    }

    /// Previous option, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Gender::Male => Gender::Other,
            Gender::Female => Gender::Male,
            Gender::Other => Gender::Female,
        }
    }
}

/// Raw values of the sign-up form, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub section: String,
    pub emergency_contact: String,
}

impl FormValues {
    /// Get the current value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Gender => &self.gender,
            FieldName::Class => &self.class_name,
            FieldName::Section => &self.section,
            FieldName::EmergencyContact => &self.emergency_contact,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldName, value: String) {
        *self.slot_mut(field) = value;
    }

    /// Parsed gender, if the stored value is one of the offered options
    pub fn gender(&self) -> Option<Gender> {
        self.gender.parse().ok()
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Gender => &mut self.gender,
            FieldName::Class => &mut self.class_name,
            FieldName::Section => &mut self.section,
            FieldName::EmergencyContact => &mut self.emergency_contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_display_order() {
            let keys: Vec<&str> = FieldName::iter().map(FieldName::key).collect();
            assert_eq!(
                keys,
                vec![
                    "fullName",
                    "email",
                    "phoneNumber",
                    "gender",
                    "class",
                    "section",
                    "emergencyContact",
                ]
            );
        }

        #[test]
        fn test_count_matches_iter() {
            assert_eq!(FieldName::COUNT, FieldName::iter().count());
        }

        #[test]
        fn test_key_parses_back() {
            for field in FieldName::iter() {
                assert_eq!(field.key().parse::<FieldName>().unwrap(), field);
            }
        }

        #[test]
        fn test_unknown_key_rejected() {
            assert!("full_name".parse::<FieldName>().is_err());
        }

        #[test]
        fn test_index_round_trip() {
            for field in FieldName::iter() {
                assert_eq!(FieldName::from_index(field.index()), Some(field));
            }
            assert!(FieldName::from_index(FieldName::COUNT).is_none());
        }

        #[test]
        fn test_only_gender_is_select() {
            let selects: Vec<FieldName> = FieldName::iter().filter(|f| f.is_select()).collect();
            assert_eq!(selects, vec![FieldName::Gender]);
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldName::PhoneNumber.label(), "Phone Number");
            assert_eq!(FieldName::EmergencyContact.label(), "Emergency Contact");
        }
    }

    mod gender {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_wraps() {
            assert_eq!(Gender::Male.next(), Gender::Female);
            assert_eq!(Gender::Other.next(), Gender::Male);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(Gender::Male.prev(), Gender::Other);
            assert_eq!(Gender::Female.prev(), Gender::Male);
        }

        #[test]
        fn test_parse_is_case_sensitive() {
            assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
            assert!("female".parse::<Gender>().is_err());
            assert!("".parse::<Gender>().is_err());
        }
    }

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let values = FormValues::default();
            for field in FieldName::iter() {
                assert_eq!(values.get(field), "");
            }
            assert!(values.gender().is_none());
        }

        #[test]
        fn test_set_targets_single_field() {
            let mut values = FormValues::default();
            values.set(FieldName::Class, "10".to_string());
            assert_eq!(values.class_name, "10");
            assert_eq!(values.get(FieldName::Class), "10");
            assert_eq!(values.section, "");
        }

        #[test]
        fn test_serializes_with_wire_keys() {
            let values = FormValues {
                full_name: "Ada Lovelace".to_string(),
                class_name: "10".to_string(),
                ..Default::default()
            };
            let json = serde_json::to_value(&values).unwrap();
            assert_eq!(json["fullName"], "Ada Lovelace");
            assert_eq!(json["class"], "10");
            assert!(json.get("class_name").is_none());
            assert!(json.get("emergencyContact").is_some());
        }
    }
}
