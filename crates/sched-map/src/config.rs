//! Serde-friendly field-map override files.
//!
//! Override files can only express candidate-name lists; custom extraction
//! functions are an API-level feature and have no file representation.

use serde::Deserialize;

use crate::field_map::{
    FieldMapOverrides, RelationshipResolverOverrides, TaskResolverOverrides,
    WbsResolverOverrides,
};
use crate::resolver::FieldResolver;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskResolverConfig {
    pub id: Option<Vec<String>>,
    pub name: Option<Vec<String>>,
    pub wbs_id: Option<Vec<String>>,
    pub start: Option<Vec<String>>,
    pub finish: Option<Vec<String>>,
    pub duration_days: Option<Vec<String>>,
    pub duration_hours: Option<Vec<String>>,
    pub percent_complete: Option<Vec<String>>,
    pub critical: Option<Vec<String>>,
    pub predecessors: Option<Vec<String>>,
    pub activity_id: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelationshipResolverConfig {
    pub source: Option<Vec<String>>,
    pub target: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub rel_type: Option<Vec<String>>,
    pub lag_hours: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WbsResolverConfig {
    pub id: Option<Vec<String>>,
    pub parent_id: Option<Vec<String>>,
    pub name: Option<Vec<String>>,
}

/// A partial field map as read from a JSON configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMapConfig {
    pub task: Option<TaskResolverConfig>,
    pub rel: Option<RelationshipResolverConfig>,
    pub wbs: Option<WbsResolverConfig>,
}

impl FieldMapConfig {
    pub fn into_overrides(self) -> FieldMapOverrides {
        FieldMapOverrides {
            task: self.task.map(|task| TaskResolverOverrides {
                id: task.id.map(FieldResolver::Candidates),
                name: task.name.map(FieldResolver::Candidates),
                wbs_id: task.wbs_id.map(FieldResolver::Candidates),
                start: task.start.map(FieldResolver::Candidates),
                finish: task.finish.map(FieldResolver::Candidates),
                duration_days: task.duration_days.map(FieldResolver::Candidates),
                duration_hours: task.duration_hours.map(FieldResolver::Candidates),
                percent_complete: task.percent_complete.map(FieldResolver::Candidates),
                critical: task.critical.map(FieldResolver::Candidates),
                predecessors: task.predecessors.map(FieldResolver::Candidates),
                activity_id: task.activity_id.map(FieldResolver::Candidates),
            }),
            rel: self.rel.map(|rel| RelationshipResolverOverrides {
                source: rel.source.map(FieldResolver::Candidates),
                target: rel.target.map(FieldResolver::Candidates),
                rel_type: rel.rel_type.map(FieldResolver::Candidates),
                lag_hours: rel.lag_hours.map(FieldResolver::Candidates),
            }),
            wbs: self.wbs.map(|wbs| WbsResolverOverrides {
                id: wbs.id.map(FieldResolver::Candidates),
                parent_id: wbs.parent_id.map(FieldResolver::Candidates),
                name: wbs.name.map(FieldResolver::Candidates),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::field_map::merge_field_map;
    use crate::resolver::FieldResolver;

    use super::*;

    #[test]
    fn config_file_round_trips_into_a_merge() {
        let config: FieldMapConfig = serde_json::from_str(
            r#"{ "task": { "id": ["uid"], "start": ["begin_date"] } }"#,
        )
        .expect("parse config");
        let overrides = config.into_overrides();
        let map = merge_field_map(Some(&overrides));
        match &map.task.id {
            FieldResolver::Candidates(names) => assert_eq!(names, &["uid"]),
            FieldResolver::Custom(_) => panic!("expected candidates"),
        }
        match &map.task.finish {
            FieldResolver::Candidates(names) => {
                assert_eq!(names[0], "act_end_date");
            }
            FieldResolver::Custom(_) => panic!("expected candidates"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = serde_json::from_str::<FieldMapConfig>(
            r#"{ "task": { "colour": ["c"] } }"#,
        );
        assert!(parsed.is_err());
    }
}
