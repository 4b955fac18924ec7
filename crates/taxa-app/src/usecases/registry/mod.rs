//! Business-registry lookup.

pub mod lookup_ico;

pub use lookup_ico::LookupIco;
