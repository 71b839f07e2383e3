mod region_code;
mod locale_database;

pub use region_code::RegionCode;
pub use locale_database::{CultureInfo, LocaleDatabase, RegionInfo};
