//! HTTP service fetching the known role profiles.

use gloo_net::http::Request;

use crate::config::ROLES_PATH;
use crate::types::{AppError, AppResult, RoleProfile};

/// Fetch the role profiles used for target-role suggestions.
pub async fn fetch_role_profiles(base_url: &str) -> AppResult<Vec<RoleProfile>> {
    let url = format!("{}{}", base_url, ROLES_PATH);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Server(response.status()));
    }

    response
        .json::<Vec<RoleProfile>>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_list_decodes() {
        let json = r#"[
            {
                "role": "Data Engineer",
                "skills": ["Python", "SQL", "Airflow"],
                "version": 3,
                "locked": false
            },
            {
                "role": "Backend Developer",
                "skills": ["Rust", "PostgreSQL"],
                "version": 1,
                "locked": true
            }
        ]"#;

        let profiles: Vec<RoleProfile> = serde_json::from_str(json).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].role, "Data Engineer");
        assert_eq!(profiles[0].skills, vec!["Python", "SQL", "Airflow"]);
        assert!(profiles[1].locked);
    }
}
