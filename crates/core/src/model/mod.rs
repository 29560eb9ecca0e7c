mod catalog;
mod ids;
mod pattern;
mod settings;
mod summary;

pub use catalog::{CatalogError, PatternCatalog};
pub use ids::PatternId;
pub use pattern::{ImageRef, Pattern, PatternError};
pub use settings::{DEFAULT_PASS_THRESHOLD, QuizSettings, SettingsError};
pub use summary::{QuizSummary, SummaryError};
