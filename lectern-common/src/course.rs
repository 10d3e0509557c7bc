use serde::{Deserialize, Serialize};

/// A course as served by the catalog API.
///
/// Identifiers are unique within the collection. `seq_no` orders courses
/// within their own category only; the collection as a whole has no
/// meaningful global order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(rename = "seqNo")]
    pub seq_no: i64,
    pub description: String,
    pub category: String,
    #[serde(rename = "iconUrl", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(
        rename = "courseListIcon",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub course_list_icon: Option<String>,
    #[serde(
        rename = "longDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
    #[serde(
        rename = "lessonsCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lessons_count: Option<u32>,
}

/// A partial course update.
///
/// Only the set fields are serialized, so a value doubles as the PUT body
/// sent to the API and as the overlay applied to the cached course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseChanges {
    #[serde(rename = "seqNo", default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "iconUrl", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(
        rename = "courseListIcon",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub course_list_icon: Option<String>,
    #[serde(
        rename = "longDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
    #[serde(
        rename = "lessonsCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lessons_count: Option<u32>,
}

impl CourseChanges {
    /// Overlay these changes on an existing course. Unset fields keep their
    /// current value.
    pub fn apply_to(&self, course: &Course) -> Course {
        let mut merged = course.clone();
        if let Some(seq_no) = self.seq_no {
            merged.seq_no = seq_no;
        }
        if let Some(ref description) = self.description {
            merged.description = description.clone();
        }
        if let Some(ref category) = self.category {
            merged.category = category.clone();
        }
        if let Some(ref icon_url) = self.icon_url {
            merged.icon_url = Some(icon_url.clone());
        }
        if let Some(ref course_list_icon) = self.course_list_icon {
            merged.course_list_icon = Some(course_list_icon.clone());
        }
        if let Some(ref long_description) = self.long_description {
            merged.long_description = Some(long_description.clone());
        }
        if let Some(lessons_count) = self.lessons_count {
            merged.lessons_count = Some(lessons_count);
        }
        merged
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beginner_course() -> Course {
        Course {
            id: "12".to_string(),
            seq_no: 4,
            description: "Angular Core Deep Dive".to_string(),
            category: "BEGINNER".to_string(),
            icon_url: Some("https://example.com/icon.png".to_string()),
            course_list_icon: None,
            long_description: Some("A deep dive into the framework core".to_string()),
            lessons_count: Some(10),
        }
    }

    #[test]
    fn parse_course_with_camel_case_fields() {
        let json = r#"{
            "id": "12",
            "seqNo": 4,
            "description": "Angular Core Deep Dive",
            "category": "BEGINNER",
            "iconUrl": "https://example.com/icon.png",
            "lessonsCount": 10
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "12");
        assert_eq!(course.seq_no, 4);
        assert_eq!(course.category, "BEGINNER");
        assert_eq!(course.icon_url.as_deref(), Some("https://example.com/icon.png"));
        assert_eq!(course.lessons_count, Some(10));
        assert!(course.course_list_icon.is_none());
        assert!(course.long_description.is_none());
    }

    #[test]
    fn changes_serialize_only_set_fields() {
        let changes = CourseChanges {
            category: Some("ADVANCED".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(json, serde_json::json!({"category": "ADVANCED"}));
    }

    #[test]
    fn empty_changes_serialize_to_empty_object() {
        let json = serde_json::to_value(CourseChanges::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
        assert!(CourseChanges::default().is_empty());
    }

    #[test]
    fn apply_to_overlays_only_set_fields() {
        let course = beginner_course();
        let changes = CourseChanges {
            category: Some("ADVANCED".to_string()),
            seq_no: Some(1),
            ..Default::default()
        };

        let merged = changes.apply_to(&course);

        assert_eq!(merged.category, "ADVANCED");
        assert_eq!(merged.seq_no, 1);
        assert_eq!(merged.id, course.id);
        assert_eq!(merged.description, course.description);
        assert_eq!(merged.icon_url, course.icon_url);
        assert_eq!(merged.long_description, course.long_description);
        assert_eq!(merged.lessons_count, course.lessons_count);
    }

    #[test]
    fn apply_to_with_empty_changes_is_identity() {
        let course = beginner_course();
        assert_eq!(CourseChanges::default().apply_to(&course), course);
    }
}
