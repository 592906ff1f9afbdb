mod validator;
mod writer;

pub use validator::validate_snapshot;
pub use writer::{REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_validation_report_json};
