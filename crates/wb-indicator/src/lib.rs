// File: crates/wb-indicator/src/lib.rs
// Summary: Fetch a World Bank indicator, flatten it to a tabular file, and slice it by cohort.

mod atomic;
pub mod codec;
pub mod cohort;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod record;
pub mod tabular;
pub mod transform;

pub use codec::TextCodec;
pub use cohort::{select_cohort, CohortSeries, INCOME_LEVELS, WORLD};
pub use dataset::IndicatorDataset;
pub use error::{CodecError, CohortError, DatasetError, FetchError, TabularError, TransformError};
pub use fetch::{fetch_all, fetch_to_file, DateRange, IndicatorQuery, Page, PageSource, WorldBankClient};
pub use record::{CountryRef, IndicatorRecord, PageMeta, Scalar};
pub use tabular::{read_tabular, write_tabular, TabularRow, HEADER};
pub use transform::{project, transform_file};
