use chrono::{DateTime, Utc};
use serde_json::Value;

/// Typed view over a user-lookup body.
///
/// GitHub's error bodies (unknown user, rate limit) decode as objects
/// without a `login` field; those yield `None`, which the front-end renders
/// as "No Results".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub public_repos: u64,
}

impl Profile {
    pub fn from_results(results: &Value) -> Option<Profile> {
        let login = results.get("login").and_then(|v| v.as_str())?;

        Some(Profile {
            login: login.to_string(),
            avatar_url: results
                .get("avatar_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            html_url: results
                .get("html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            public_repos: results
                .get("public_repos")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
        })
    }
}

/// One repository row as rendered in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub name: String,
    pub html_url: String,
    pub language: Option<String>,
    pub updated_at: String,
}

/// Extract repository rows from a raw listing body. A non-array body (an
/// error object, or the initial empty state) yields an empty list.
pub fn repo_entries(repos: &Value) -> Vec<RepoEntry> {
    let Some(items) = repos.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| RepoEntry {
            name: item
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            html_url: item
                .get("html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            language: item
                .get("language")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            updated_at: item
                .get("updated_at")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
        .collect()
}

/// Sort repositories most-recently-updated first. The stored state is never
/// mutated; callers pass an extracted copy.
///
/// ISO-8601 timestamps compare chronologically as strings, and `sort_by` is
/// stable, so entries updated at the same instant keep GitHub's order.
pub fn sorted_by_updated(mut entries: Vec<RepoEntry>) -> Vec<RepoEntry> {
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    entries
}

/// Render an `updated_at` timestamp as a UTC `YYYY-MM-DD` date. Input that
/// fails to parse is shown as-is.
pub fn format_updated_date(updated_at: &str) -> String {
    match DateTime::parse_from_rfc3339(updated_at) {
        Ok(ts) => ts.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => updated_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_extracts_expected_fields() {
        let body = json!({
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "public_repos": 8,
            "followers": 9999
        });

        let profile = Profile::from_results(&body).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.html_url, "https://github.com/octocat");
        assert_eq!(profile.public_repos, 8);
    }

    #[test]
    fn error_body_without_login_is_no_result() {
        let body = json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        });
        assert!(Profile::from_results(&body).is_none());
    }

    #[test]
    fn initial_null_state_is_no_result() {
        assert!(Profile::from_results(&Value::Null).is_none());
    }

    #[test]
    fn repo_entries_from_error_object_are_empty() {
        let body = json!({ "message": "Not Found" });
        assert!(repo_entries(&body).is_empty());
        assert!(repo_entries(&Value::Null).is_empty());
    }

    #[test]
    fn repo_entries_tolerate_missing_fields() {
        let body = json!([
            { "name": "dotfiles" },
            { "name": "blog", "language": null, "updated_at": "2024-05-01T00:00:00Z" }
        ]);

        let entries = repo_entries(&body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "dotfiles");
        assert!(entries[0].language.is_none());
        assert_eq!(entries[0].updated_at, "");
        assert_eq!(entries[1].updated_at, "2024-05-01T00:00:00Z");
    }

    #[test]
    fn sort_is_descending_by_updated_at() {
        let body = json!([
            { "name": "old", "updated_at": "2022-01-01T00:00:00Z" },
            { "name": "newest", "updated_at": "2024-06-01T12:00:00Z" },
            { "name": "middle", "updated_at": "2023-03-15T08:30:00Z" }
        ]);

        let sorted = sorted_by_updated(repo_entries(&body));
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "old"]);

        for pair in sorted.windows(2) {
            assert!(pair[0].updated_at >= pair[1].updated_at);
        }
    }

    #[test]
    fn sort_keeps_original_order_on_ties() {
        let body = json!([
            { "name": "first", "updated_at": "2024-01-01T00:00:00Z" },
            { "name": "second", "updated_at": "2024-01-01T00:00:00Z" },
            { "name": "third", "updated_at": "2024-01-01T00:00:00Z" }
        ]);

        let sorted = sorted_by_updated(repo_entries(&body));
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn updated_date_renders_as_utc_day() {
        assert_eq!(
            format_updated_date("2023-01-15T10:30:00Z"),
            "2023-01-15".to_string()
        );
        // Offset timestamps normalize to the UTC calendar day.
        assert_eq!(
            format_updated_date("2023-01-15T22:30:00-05:00"),
            "2023-01-16".to_string()
        );
    }

    #[test]
    fn unparseable_date_falls_back_to_raw_text() {
        assert_eq!(format_updated_date("yesterday"), "yesterday".to_string());
        assert_eq!(format_updated_date(""), "".to_string());
    }
}
