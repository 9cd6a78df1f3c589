mod detail;
mod nested;
mod paged;
mod summary;

pub use detail::{MovieDetail, MovieStatus, OpaqueValue};
pub use nested::{Genre, ProductionCompany, ProductionCountry, SpokenLanguage};
pub use paged::PagedResult;
pub use summary::MovieSummary;
