pub mod interfaces;
pub mod i18n;
pub mod grammar;
pub mod countrycatalog;
pub mod phoneformatter;
mod phone_number_value;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use countrycatalog::{CatalogOrder, CallingCodeOwners, CountryCatalog, CountryEntry, COUNTRY_CATALOG};
pub use phoneformatter::{PhoneFormatter, PhoneNumberComponents, PHONE_FORMATTER, trim_phone};
pub use phone_number_value::PhoneNumberValue;
