//! Static reference data: the type chart and the built-in species and move
//! catalogs backing [`catalog::BuiltinCatalog`].

pub mod catalog;
pub mod moves;
pub mod species;
pub mod types;


/// Normalize a display name into a catalog key ("Thunder Wave" -> "thunderwave").
pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
