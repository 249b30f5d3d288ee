pub mod load;
pub mod series;

pub use load::{load_csv, select_wave};
pub use series::{DegenerateInputError, TimeSeries};
