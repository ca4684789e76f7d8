use serde::{Deserialize, Serialize};

pub type JobId = u64;

/// One row of a job listing as served by the backend.
///
/// The backend is inconsistent about `mode`/`work_mode` and `type`/`job_type`;
/// both spellings are kept and read through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

impl JobSummary {
    pub fn work_mode(&self) -> Option<&str> {
        self.work_mode.as_deref().or(self.mode.as_deref())
    }

    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref().or(self.kind.as_deref())
    }

    /// Single-letter badge shown when there is no logo.
    pub fn company_initial(&self) -> char {
        self.company.chars().next().unwrap_or('?')
    }
}

/// Full posting as returned by `GET /jobs/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub applications_count: Option<u64>,
}

/// Uniform result of a listing fetch regardless of the response shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPage {
    pub items: Vec<JobSummary>,
    pub total_pages: u32,
    pub total_results: u64,
}

/// A past search as returned by `GET /jobs/search/history`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHistoryEntry {
    pub id: String,
    pub query: String,
    pub filters: serde_json::Map<String, serde_json::Value>,
    pub results_count: u64,
    pub search_date: String,
}

impl SearchHistoryEntry {
    pub fn location(&self) -> Option<&str> {
        self.filters
            .get("location")
            .and_then(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobAlert {
    pub id: u64,
    pub keywords: Vec<String>,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub frequency: String,
}

/// Body of `POST /notifications/alerts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAlertRequest {
    pub user_id: crate::UserId,
    pub keywords: Vec<String>,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub frequency: String,
}

/// Body of `POST /jobs/` and `PUT /jobs/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    #[serde(default = "default_company_id")]
    pub company_id: u64,
    pub location: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default = "default_work_mode")]
    pub work_mode: String,
    #[serde(default = "default_job_type")]
    pub job_type: String,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            company_id: default_company_id(),
            location: String::new(),
            salary_min: None,
            salary_max: None,
            work_mode: default_work_mode(),
            job_type: default_job_type(),
        }
    }
}

fn default_company_id() -> u64 {
    1
}

fn default_work_mode() -> String {
    "on-site".to_string()
}

fn default_job_type() -> String {
    "full-time".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_naming_variant_is_accepted() {
        let short: JobSummary = serde_json::from_str(
            r#"{"id":1,"title":"Dev","company":"Acme","location":"İzmir","mode":"remote","type":"full-time"}"#,
        )
        .unwrap();
        let long: JobSummary = serde_json::from_str(
            r#"{"id":2,"title":"Dev","company":"Acme","location":"İzmir","work_mode":"hybrid","job_type":"contract"}"#,
        )
        .unwrap();

        assert_eq!(short.work_mode(), Some("remote"));
        assert_eq!(short.job_type(), Some("full-time"));
        assert_eq!(long.work_mode(), Some("hybrid"));
        assert_eq!(long.job_type(), Some("contract"));
        assert_eq!(long.logo, None);
    }

    #[test]
    fn detail_flattens_summary_fields() {
        let detail: JobDetail = serde_json::from_str(
            r#"{"id":5,"title":"Dev","company":"Acme","location":"Ankara","description":"Build things","salary_min":1000}"#,
        )
        .unwrap();
        assert_eq!(detail.summary.id, 5);
        assert_eq!(detail.description.as_deref(), Some("Build things"));
        assert_eq!(detail.salary_min, Some(1000.0));
    }

    #[test]
    fn posting_defaults_match_form_defaults() {
        let posting: JobPosting = serde_json::from_str(
            r#"{"title":"Dev","description":"Build good things","location":"Bursa"}"#,
        )
        .unwrap();
        assert_eq!(posting.company_id, 1);
        assert_eq!(posting.work_mode, "on-site");
        assert_eq!(posting.job_type, "full-time");
    }
}
