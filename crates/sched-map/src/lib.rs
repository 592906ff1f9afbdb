pub mod config;
pub mod field_map;
pub mod resolver;

pub use config::{
    FieldMapConfig, RelationshipResolverConfig, TaskResolverConfig, WbsResolverConfig,
};
pub use field_map::{
    FieldMap, FieldMapOverrides, RelationshipResolverOverrides, RelationshipResolvers,
    TaskResolverOverrides, TaskResolvers, WbsResolverOverrides, WbsResolvers,
    merge_field_map,
};
pub use resolver::{FieldResolver, resolve};
