use serde::{Deserialize, Serialize};

/// A lesson belonging to a course.
///
/// Lessons are fetched on demand per course or via search; they are not part
/// of the cached course collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub description: String,
    #[serde(rename = "seqNo")]
    pub seq_no: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lesson_with_camel_case_fields() {
        let json = r#"{
            "id": "120",
            "courseId": "12",
            "description": "Introduction",
            "seqNo": 1,
            "duration": "4:17",
            "videoId": "abc123"
        }"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.id, "120");
        assert_eq!(lesson.course_id, "12");
        assert_eq!(lesson.seq_no, 1);
        assert_eq!(lesson.duration.as_deref(), Some("4:17"));
        assert_eq!(lesson.video_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn parse_lesson_without_optional_fields() {
        let json = r#"{
            "id": "121",
            "courseId": "12",
            "description": "Components",
            "seqNo": 2
        }"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert!(lesson.duration.is_none());
        assert!(lesson.video_id.is_none());
    }
}
