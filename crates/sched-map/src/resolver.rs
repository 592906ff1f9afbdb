//! Resolution of canonical fields out of raw, vendor-shaped records.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use sched_model::RawRecord;

/// Caller-supplied extraction function.
pub type CustomResolverFn = dyn Fn(&RawRecord) -> Option<Value> + Send + Sync;

/// How one canonical field is extracted from a raw record.
///
/// The two variants are dispatched explicitly: candidate lists get the
/// first-non-empty-match policy, custom functions are invoked verbatim.
#[derive(Clone)]
pub enum FieldResolver {
    /// Ordered candidate raw-field names; the first non-null, non-empty
    /// match wins.
    Candidates(Vec<String>),
    /// Caller-supplied extraction. The result is returned without further
    /// validation, and a panic inside the function propagates to the
    /// caller; the engine neither catches nor wraps it.
    Custom(Arc<CustomResolverFn>),
}

impl FieldResolver {
    pub fn candidates<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Candidates(names.into_iter().map(Into::into).collect())
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&RawRecord) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidates(names) => f.debug_tuple("Candidates").field(names).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}

/// Resolves one canonical field from a raw record.
///
/// Returns `None` immediately when the field has no configured resolver.
/// Candidate names are tried in order; a value counts as a match when it is
/// present, not `null`, and not an empty string. The record is never
/// mutated.
pub fn resolve(record: &RawRecord, resolver: Option<&FieldResolver>) -> Option<Value> {
    match resolver? {
        FieldResolver::Candidates(names) => {
            for name in names {
                if let Some(value) = record.get(name)
                    && !is_empty(value)
                {
                    return Some(value.clone());
                }
            }
            None
        }
        FieldResolver::Custom(extract) => extract(record),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn first_candidate_wins() {
        let record = record(json!({ "a": "first", "b": "second" }));
        let resolver = FieldResolver::candidates(["a", "b"]);
        assert_eq!(resolve(&record, Some(&resolver)), Some(json!("first")));
    }

    #[test]
    fn null_and_empty_values_are_skipped() {
        let record = record(json!({ "a": null, "b": "", "c": "kept" }));
        let resolver = FieldResolver::candidates(["a", "b", "c"]);
        assert_eq!(resolve(&record, Some(&resolver)), Some(json!("kept")));
    }

    #[test]
    fn zero_is_a_match() {
        let record = record(json!({ "lag_hr_cnt": 0 }));
        let resolver = FieldResolver::candidates(["lag_hr_cnt"]);
        assert_eq!(resolve(&record, Some(&resolver)), Some(json!(0)));
    }

    #[test]
    fn no_candidate_matches() {
        let record = record(json!({ "other": 1 }));
        let resolver = FieldResolver::candidates(["a", "b"]);
        assert_eq!(resolve(&record, Some(&resolver)), None);
    }

    #[test]
    fn missing_resolver_skips_the_record() {
        let record = record(json!({ "a": "value" }));
        assert_eq!(resolve(&record, None), None);
    }

    #[test]
    fn custom_function_result_is_verbatim() {
        let record = record(json!({ "first": "Jane", "last": "Doe" }));
        let resolver = FieldResolver::custom(|record| {
            let first = record.get("first")?.as_str()?;
            let last = record.get("last")?.as_str()?;
            Some(json!(format!("{first} {last}")))
        });
        assert_eq!(resolve(&record, Some(&resolver)), Some(json!("Jane Doe")));
    }
}
