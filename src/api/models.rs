use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform account as returned by `/api/getusers` and `/api/getpaid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub plan: PlanKind,
}

/// Subscription tier associated with a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    #[default]
    Free,
    Monthly,
    Yearly,
    Forever,
}

impl PlanKind {
    pub const ALL: [PlanKind; 4] = [
        PlanKind::Free,
        PlanKind::Monthly,
        PlanKind::Yearly,
        PlanKind::Forever,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlanKind::Free => "Free",
            PlanKind::Monthly => "Monthly",
            PlanKind::Yearly => "Yearly",
            PlanKind::Forever => "Forever",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
}

/// The main admin is the primary account and cannot be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdminRole {
    #[serde(rename = "main-admin")]
    Main,
    #[default]
    #[serde(rename = "admin")]
    Regular,
}

impl AdminRole {
    pub fn is_main(self) -> bool {
        matches!(self, AdminRole::Main)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub kind: CourseKind,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    Video,
    Theory,
}

impl CourseKind {
    pub fn label(self) -> &'static str {
        match self {
            CourseKind::Video => "Video",
            CourseKind::Theory => "Theory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Counts rendered by the dashboard stat cards, from `POST /api/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub courses: u64,
    #[serde(default)]
    pub paid: u64,
    #[serde(default)]
    pub messages: u64,
}

/// One static policy document from `GET /api/policies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDoc {
    pub title: String,
    pub content: String,
}

// Request/response wire types. Field names are owned by the backend.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailPayload {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResultRequest {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "marksString")]
    pub marks_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailRequest {
    pub html: String,
    pub email: String,
    pub subjects: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShareableResponse {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSharedRequest {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_plan_tags_are_lowercase() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Ada","email":"ada@example.com","plan":"yearly"}"#,
        )
        .unwrap();
        assert_eq!(user.plan, PlanKind::Yearly);

        let missing_plan: User =
            serde_json::from_str(r#"{"id":"u2","name":"Bob","email":"bob@example.com"}"#).unwrap();
        assert_eq!(missing_plan.plan, PlanKind::Free);
    }

    #[test]
    fn main_admin_role_round_trips() {
        let admin: Admin = serde_json::from_str(
            r#"{"id":"a1","name":"Root","email":"root@example.com","role":"main-admin"}"#,
        )
        .unwrap();
        assert!(admin.role.is_main());
        assert_eq!(
            serde_json::to_string(&admin.role).unwrap(),
            r#""main-admin""#
        );
    }

    #[test]
    fn course_uses_backend_field_names() {
        let course: Course = serde_json::from_str(
            r#"{
                "id": "c1",
                "title": "Linear Algebra",
                "author": "Ada",
                "type": "theory",
                "completed": true,
                "createdAt": "2024-03-01T12:00:00Z",
                "thumbnail": "https://cdn.example.com/c1.png"
            }"#,
        )
        .unwrap();
        assert_eq!(course.kind, CourseKind::Theory);
        assert!(course.completed);
        assert_eq!(course.created_at.format("%Y-%m-%d").to_string(), "2024-03-01");
    }

    #[test]
    fn contact_phone_is_optional() {
        let msg: ContactMessage = serde_json::from_str(
            r#"{
                "id": "m1",
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com",
                "message": "Please call me back"
            }"#,
        )
        .unwrap();
        assert_eq!(msg.phone, None);
        assert_eq!(msg.full_name(), "Grace Hopper");
    }

    #[test]
    fn update_result_request_matches_backend_contract() {
        let body = UpdateResultRequest {
            course_id: "c1".to_string(),
            marks_string: "60".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"courseId":"c1","marksString":"60"}"#
        );
    }

    #[test]
    fn mail_request_keeps_the_subjects_field_name() {
        let body = MailRequest {
            html: "<p>hi</p>".to_string(),
            email: "ada@example.com".to_string(),
            subjects: "Algebra Quiz result".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""subjects":"Algebra Quiz result""#));
    }
}
