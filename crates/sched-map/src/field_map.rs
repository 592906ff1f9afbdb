//! Field-map configuration: canonical field -> resolver, with built-in
//! defaults and partial overrides.

use crate::resolver::FieldResolver;

/// Resolvers for task records.
///
/// `id`, `name`, `wbs_id`, `start`, and `finish` are required canonical
/// fields and always carry a resolver; the rest degrade to absent values
/// when unconfigured.
#[derive(Debug, Clone)]
pub struct TaskResolvers {
    pub id: FieldResolver,
    pub name: FieldResolver,
    pub wbs_id: FieldResolver,
    pub start: FieldResolver,
    pub finish: FieldResolver,
    pub duration_days: Option<FieldResolver>,
    pub duration_hours: Option<FieldResolver>,
    pub percent_complete: Option<FieldResolver>,
    pub critical: Option<FieldResolver>,
    pub predecessors: Option<FieldResolver>,
    pub activity_id: Option<FieldResolver>,
}

/// Resolvers for relationship records.
#[derive(Debug, Clone)]
pub struct RelationshipResolvers {
    pub source: FieldResolver,
    pub target: FieldResolver,
    pub rel_type: FieldResolver,
    pub lag_hours: Option<FieldResolver>,
}

/// Resolvers for WBS records.
#[derive(Debug, Clone)]
pub struct WbsResolvers {
    pub id: FieldResolver,
    pub parent_id: Option<FieldResolver>,
    pub name: FieldResolver,
}

/// The three resolver groups used by one normalization run.
#[derive(Debug, Clone)]
pub struct FieldMap {
    pub task: TaskResolvers,
    pub rel: RelationshipResolvers,
    pub wbs: WbsResolvers,
}

impl Default for FieldMap {
    /// The built-in default mapping, aimed at Primavera-style exports.
    ///
    /// Every call constructs a fresh structural copy, so callers may
    /// mutate the returned map without affecting other callers.
    fn default() -> Self {
        Self {
            task: TaskResolvers {
                id: FieldResolver::candidates(["task_id"]),
                name: FieldResolver::candidates(["task_name"]),
                wbs_id: FieldResolver::candidates(["wbs_id"]),
                start: FieldResolver::candidates([
                    "act_start_date",
                    "early_start_date",
                    "target_start_date",
                ]),
                finish: FieldResolver::candidates([
                    "act_end_date",
                    "early_end_date",
                    "target_end_date",
                ]),
                duration_days: Some(FieldResolver::candidates(["task_drtn_days"])),
                duration_hours: Some(FieldResolver::candidates([
                    "target_drtn_hr_cnt",
                    "orig_duration_hr_cnt",
                ])),
                percent_complete: Some(FieldResolver::candidates(["phys_complete_pct"])),
                critical: Some(FieldResolver::candidates(["critical_path"])),
                predecessors: Some(FieldResolver::candidates(["predecessors"])),
                activity_id: Some(FieldResolver::candidates(["activity_id"])),
            },
            rel: RelationshipResolvers {
                source: FieldResolver::candidates(["pred_task_id"]),
                target: FieldResolver::candidates(["task_id"]),
                rel_type: FieldResolver::candidates(["pred_type"]),
                lag_hours: Some(FieldResolver::candidates(["lag_hr_cnt"])),
            },
            wbs: WbsResolvers {
                id: FieldResolver::candidates(["wbs_id"]),
                parent_id: Some(FieldResolver::candidates(["parent_wbs_id"])),
                name: FieldResolver::candidates(["wbs_name"]),
            },
        }
    }
}

/// Partial override for the task group; `Some` replaces that field's
/// resolver entirely, `None` keeps the default.
#[derive(Debug, Clone, Default)]
pub struct TaskResolverOverrides {
    pub id: Option<FieldResolver>,
    pub name: Option<FieldResolver>,
    pub wbs_id: Option<FieldResolver>,
    pub start: Option<FieldResolver>,
    pub finish: Option<FieldResolver>,
    pub duration_days: Option<FieldResolver>,
    pub duration_hours: Option<FieldResolver>,
    pub percent_complete: Option<FieldResolver>,
    pub critical: Option<FieldResolver>,
    pub predecessors: Option<FieldResolver>,
    pub activity_id: Option<FieldResolver>,
}

/// Partial override for the relationship group.
#[derive(Debug, Clone, Default)]
pub struct RelationshipResolverOverrides {
    pub source: Option<FieldResolver>,
    pub target: Option<FieldResolver>,
    pub rel_type: Option<FieldResolver>,
    pub lag_hours: Option<FieldResolver>,
}

/// Partial override for the WBS group.
#[derive(Debug, Clone, Default)]
pub struct WbsResolverOverrides {
    pub id: Option<FieldResolver>,
    pub parent_id: Option<FieldResolver>,
    pub name: Option<FieldResolver>,
}

/// Partial field-map configuration merged onto the defaults.
#[derive(Debug, Clone, Default)]
pub struct FieldMapOverrides {
    pub task: Option<TaskResolverOverrides>,
    pub rel: Option<RelationshipResolverOverrides>,
    pub wbs: Option<WbsResolverOverrides>,
}

/// Overlays a partial configuration onto the built-in defaults.
///
/// The merge is shallow per group at field granularity: a field mentioned
/// in an override group replaces the default resolver for that field, and
/// unmentioned fields keep theirs. `None` yields a fresh copy of the
/// defaults.
pub fn merge_field_map(overrides: Option<&FieldMapOverrides>) -> FieldMap {
    let mut map = FieldMap::default();
    let Some(overrides) = overrides else {
        return map;
    };
    if let Some(task) = &overrides.task {
        apply(&mut map.task.id, &task.id);
        apply(&mut map.task.name, &task.name);
        apply(&mut map.task.wbs_id, &task.wbs_id);
        apply(&mut map.task.start, &task.start);
        apply(&mut map.task.finish, &task.finish);
        apply_optional(&mut map.task.duration_days, &task.duration_days);
        apply_optional(&mut map.task.duration_hours, &task.duration_hours);
        apply_optional(&mut map.task.percent_complete, &task.percent_complete);
        apply_optional(&mut map.task.critical, &task.critical);
        apply_optional(&mut map.task.predecessors, &task.predecessors);
        apply_optional(&mut map.task.activity_id, &task.activity_id);
    }
    if let Some(rel) = &overrides.rel {
        apply(&mut map.rel.source, &rel.source);
        apply(&mut map.rel.target, &rel.target);
        apply(&mut map.rel.rel_type, &rel.rel_type);
        apply_optional(&mut map.rel.lag_hours, &rel.lag_hours);
    }
    if let Some(wbs) = &overrides.wbs {
        apply(&mut map.wbs.id, &wbs.id);
        apply_optional(&mut map.wbs.parent_id, &wbs.parent_id);
        apply(&mut map.wbs.name, &wbs.name);
    }
    map
}

fn apply(slot: &mut FieldResolver, update: &Option<FieldResolver>) {
    if let Some(resolver) = update {
        *slot = resolver.clone();
    }
}

fn apply_optional(slot: &mut Option<FieldResolver>, update: &Option<FieldResolver>) {
    if let Some(resolver) = update {
        *slot = Some(resolver.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_names(resolver: &FieldResolver) -> &[String] {
        match resolver {
            FieldResolver::Candidates(names) => names,
            FieldResolver::Custom(_) => panic!("expected a candidate list"),
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let map = merge_field_map(None);
        assert_eq!(candidate_names(&map.task.id), ["task_id"]);
        assert_eq!(
            candidate_names(&map.task.start),
            ["act_start_date", "early_start_date", "target_start_date"]
        );
        assert_eq!(candidate_names(&map.rel.source), ["pred_task_id"]);
        assert_eq!(candidate_names(&map.wbs.name), ["wbs_name"]);
    }

    #[test]
    fn partial_override_replaces_only_named_fields() {
        let overrides = FieldMapOverrides {
            task: Some(TaskResolverOverrides {
                id: Some(FieldResolver::candidates(["custom_id"])),
                ..TaskResolverOverrides::default()
            }),
            ..FieldMapOverrides::default()
        };
        let map = merge_field_map(Some(&overrides));
        assert_eq!(candidate_names(&map.task.id), ["custom_id"]);
        assert_eq!(candidate_names(&map.task.name), ["task_name"]);
        assert_eq!(candidate_names(&map.rel.target), ["task_id"]);
    }

    #[test]
    fn default_copies_are_independent() {
        let mut first = FieldMap::default();
        first.task.id = FieldResolver::candidates(["mutated"]);
        let second = FieldMap::default();
        assert_eq!(candidate_names(&second.task.id), ["task_id"]);
    }

    #[test]
    fn custom_resolver_survives_the_merge() {
        let overrides = FieldMapOverrides {
            wbs: Some(WbsResolverOverrides {
                name: Some(FieldResolver::custom(|record| {
                    record.get("label").cloned()
                })),
                ..WbsResolverOverrides::default()
            }),
            ..FieldMapOverrides::default()
        };
        let map = merge_field_map(Some(&overrides));
        assert!(matches!(map.wbs.name, FieldResolver::Custom(_)));
    }
}
