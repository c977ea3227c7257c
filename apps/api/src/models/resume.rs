use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Structured resume returned by `/parse-resume` and posted back to `/match-resume`.
///
/// `skills` holds display names; the client may edit the list before matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_serializes_nulls() {
        let resume = ParsedResume {
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["contact"]["email"], serde_json::Value::Null);
        assert_eq!(value["skills"][0], "Python");
        assert!(value["experience"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_parsed_resume_deserializes_minimal_payload() {
        let json = r#"{"contact": {"name": "Ada Lovelace"}, "skills": ["Rust", "SQL"]}"#;
        let resume: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.contact.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.contact.email, None);
        assert_eq!(resume.skills, vec!["Rust", "SQL"]);
        assert!(resume.education.is_empty());
    }
}
