//! Records loaded from the three portfolio documents.
//!
//! Every field defaults to an empty value, so `Default` doubles as the fallback record used when
//! loading fails and partially filled documents still deserialize.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub website: String,
}

impl PersonalInfo {
    /// Label and value of every field, in display order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", self.name.as_str()),
            ("Role", self.role.as_str()),
            ("Location", self.location.as_str()),
            ("Email", self.email.as_str()),
            ("GitHub", self.github.as_str()),
            ("Website", self.website.as_str()),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// 0 to 100
    pub level: f64,
    pub label: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileData {
    pub personal_info: PersonalInfo,
    pub bio: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    pub icon: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HobbyData {
    pub projects: Vec<Project>,
    pub fun_activities: Vec<Activity>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalRecord {
    pub exercise: String,
    pub weight: f64,
    pub unit: String,
    pub percentage: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Benchmark {
    pub name: String,
    pub time: String,
    pub percentage: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutData {
    /// Insertion ordered, values are shown verbatim
    pub week_stats: Map<String, Value>,
    pub personal_records: Vec<PersonalRecord>,
    pub benchmarks: Vec<Benchmark>,
    pub last_updated: Option<String>,
}

impl WorkoutData {
    pub fn week_stat_rows(&self) -> impl Iterator<Item = (&str, String)> {
        self.week_stats.iter().map(|(k, v)| {
            let value = match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (k.as_str(), value)
        })
    }
}

/// Everything the views are built from
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: ProfileData,
    pub hobbies: HobbyData,
    pub workouts: WorkoutData,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_profile_fills_defaults() {
        let profile: ProfileData =
            serde_json::from_str(r#"{ "personalInfo": { "name": "Ada" } }"#).unwrap();
        assert_eq!(profile.personal_info.name, "Ada");
        assert_eq!(profile.personal_info.email, "");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn week_stats_keep_document_order() {
        let workouts: WorkoutData = serde_json::from_str(
            r#"{ "weekStats": { "Workouts": "5 / 6", "Volume": 12450, "Rest": null } }"#,
        )
        .unwrap();
        let rows: Vec<_> = workouts.week_stat_rows().collect();
        assert_eq!(
            rows,
            [
                ("Workouts", "5 / 6".to_string()),
                ("Volume", "12450".to_string()),
                ("Rest", String::new())
            ]
        );
        assert_eq!(workouts.last_updated, None);
    }

    #[test]
    fn hobbies_use_camel_case_keys() {
        let hobbies: HobbyData = serde_json::from_str(
            r#"{ "funActivities": [ { "icon": "*", "name": "Gaming", "description": "Puzzles" } ] }"#,
        )
        .unwrap();
        assert_eq!(hobbies.fun_activities[0].name, "Gaming");
        assert!(hobbies.projects.is_empty());
    }
}
