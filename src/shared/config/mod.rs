mod settings;

pub use settings::{AppSettings, CatalogSettings, CertificationFallback, TmdbSettings};
