//! Database models and write-side input types

use serde::de::{Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A student row. Serializes with the public field names the JSON
/// endpoints expose (`studentNum`, `firstName`, `TA`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_num: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_province: Option<String>,
    #[serde(rename = "TA")]
    pub ta: bool,
    pub status: Option<String>,
    pub course: Option<i64>,
}

/// A course row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: i64,
    pub course_code: String,
    pub course_description: Option<String>,
}

/// Student fields as submitted by a form or JSON body.
///
/// Text fields stay optional strings until [`StudentInput::normalized`]
/// runs; `TA` accepts a JSON bool or a checkbox value ("on"), absent
/// meaning false; `course` accepts a number or numeric string, with empty
/// or non-numeric input treated as unassigned.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(default, deserialize_with = "de_id")]
    pub student_num: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_province: Option<String>,
    #[serde(rename = "TA", default, deserialize_with = "de_checkbox")]
    pub ta: bool,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_id")]
    pub course: Option<i64>,
}

impl StudentInput {
    /// Pre-write transform: each text field submitted as the empty string
    /// becomes NULL, so the store never holds empty-string sentinels.
    /// The field list is fixed per entity type.
    pub fn normalized(self) -> StudentInput {
        StudentInput {
            student_num: self.student_num,
            first_name: null_if_empty(self.first_name),
            last_name: null_if_empty(self.last_name),
            email: null_if_empty(self.email),
            address_street: null_if_empty(self.address_street),
            address_city: null_if_empty(self.address_city),
            address_province: null_if_empty(self.address_province),
            ta: self.ta,
            status: null_if_empty(self.status),
            course: self.course,
        }
    }
}

/// Course fields as submitted by a form or JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[serde(default, deserialize_with = "de_id")]
    pub course_id: Option<i64>,
    pub course_code: Option<String>,
    pub course_description: Option<String>,
}

impl CourseInput {
    /// Same empty-string-to-NULL transform as [`StudentInput::normalized`].
    /// A `course_code` normalized to NULL will be rejected by the table's
    /// NOT NULL constraint on insert.
    pub fn normalized(self) -> CourseInput {
        CourseInput {
            course_id: self.course_id,
            course_code: null_if_empty(self.course_code),
            course_description: null_if_empty(self.course_description),
        }
    }
}

fn null_if_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Deserialize an optional integer identifier from a number or a numeric
/// string. Forms submit "" for an unselected option; that (or any
/// non-numeric text) maps to None rather than an error.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("an integer id, a numeric string, or nothing")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            // Out of i64 range is no id at all, not a wrapped negative
            Ok(i64::try_from(v).ok())
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.parse().ok())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            d.deserialize_any(IdVisitor)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Deserialize the TA flag from a JSON bool or an HTML checkbox value.
/// A checked checkbox submits "on"; an unchecked one is absent entirely
/// (handled by `#[serde(default)]`). Any non-empty string counts as true.
fn de_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl<'de> Visitor<'de> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a boolean or checkbox value")
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
            Ok(!v.is_empty())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(false)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(false)
        }

        fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            d.deserialize_any(CheckboxVisitor)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_strings_normalize_to_null() {
        let input = StudentInput {
            first_name: Some("".to_string()),
            last_name: Some("Singh".to_string()),
            email: Some("".to_string()),
            status: Some("".to_string()),
            ..Default::default()
        };

        let normalized = input.normalized();
        assert_eq!(normalized.first_name, None);
        assert_eq!(normalized.last_name.as_deref(), Some("Singh"));
        assert_eq!(normalized.email, None);
        assert_eq!(normalized.status, None);
    }

    #[test]
    fn course_code_empty_string_normalizes_to_null() {
        let input = CourseInput {
            course_code: Some("".to_string()),
            course_description: Some("Web Programming".to_string()),
            ..Default::default()
        };

        let normalized = input.normalized();
        assert_eq!(normalized.course_code, None);
        assert_eq!(
            normalized.course_description.as_deref(),
            Some("Web Programming")
        );
    }

    #[test]
    fn ta_flag_accepts_bool_and_checkbox_values() {
        let checked: StudentInput = serde_json::from_value(json!({ "TA": "on" })).unwrap();
        assert!(checked.ta);

        let json_true: StudentInput = serde_json::from_value(json!({ "TA": true })).unwrap();
        assert!(json_true.ta);

        let absent: StudentInput = serde_json::from_value(json!({})).unwrap();
        assert!(!absent.ta);

        let empty: StudentInput = serde_json::from_value(json!({ "TA": "" })).unwrap();
        assert!(!empty.ta);
    }

    #[test]
    fn course_id_accepts_number_or_numeric_string() {
        let from_number: StudentInput = serde_json::from_value(json!({ "course": 3 })).unwrap();
        assert_eq!(from_number.course, Some(3));

        let from_string: StudentInput = serde_json::from_value(json!({ "course": "3" })).unwrap();
        assert_eq!(from_string.course, Some(3));

        let unselected: StudentInput = serde_json::from_value(json!({ "course": "" })).unwrap();
        assert_eq!(unselected.course, None);

        // Beyond i64 range must not wrap into a negative id
        let oversized: StudentInput =
            serde_json::from_value(json!({ "course": u64::MAX })).unwrap();
        assert_eq!(oversized.course, None);
    }
}
