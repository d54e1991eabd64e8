//! GitHub webhook 到 Teams MessageCard 的映射

pub mod card;
pub mod detail;
pub mod error;
pub mod github;
pub mod i18n;

pub use card::{MessageCard, build};
pub use detail::{Action, DEFAULT_THEME_COLOR, EventDetail, Fact};
pub use error::{MapError, MapResult};
pub use github::{EventKind, map, map_job_status, standard_catalog};
pub use i18n::{Catalog, Locale, Printer};
