/// Catalog identifiers are short opaque strings (`"1"`, `"2"`, ...).
pub type EntityId = String;

/// URL-safe unique key used for routing and lookups.
pub type Slug = String;
