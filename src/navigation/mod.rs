//! Navigation catalogs and the role filter over them.

pub mod catalog;
pub mod resolver;

pub use catalog::{find, validate_catalogs, CatalogGroup, NavigationEntry, PRIMARY_CATALOG, SYSTEM_CATALOG};
pub use resolver::{
    resolve_primary, resolve_primary_for_label, resolve_system, resolve_system_group_visible, visibility_for,
    Visibility,
};
