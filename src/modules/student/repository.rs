use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::utils::supabase::SupabaseClient;

// The hosted table really is named "Database".
const TABLE: &str = "Database";

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Student {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Number")]
    pub number: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
}

impl Student {
    pub fn first_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .map(String::from)
    }
}

pub async fn find_by_uid(db: SupabaseClient, uid: String) -> Result<Option<Student>> {
    db.select_eq::<Student>(TABLE, "UID", &uid)
        .await
        .map(|students| students.into_iter().next())
        .map_err(|err| {
            tracing::error!("Failed to fetch student {}: {:?}", uid, err);
            Error::UnexpectedError
        })
}

pub async fn update_language_by_uid(
    db: SupabaseClient,
    uid: String,
    language: String,
) -> Result<Vec<Student>> {
    db.update_eq::<Student>(TABLE, "UID", &uid, json!({ "Language": language }))
        .await
        .map_err(|err| {
            tracing::error!("Failed to update language for student {}: {:?}", uid, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: Option<&str>) -> Student {
        Student {
            uid: String::from("STUDENT-12345"),
            name: name.map(String::from),
            number: None,
            language: None,
        }
    }

    #[test]
    fn first_name_takes_leading_word() {
        assert_eq!(
            student(Some("Jane Mary Doe")).first_name(),
            Some(String::from("Jane"))
        );
    }

    #[test]
    fn first_name_of_blank_or_missing_name_is_none() {
        assert_eq!(student(Some("   ")).first_name(), None);
        assert_eq!(student(None).first_name(), None);
    }
}
