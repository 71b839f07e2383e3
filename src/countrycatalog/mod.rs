mod helper_constants;
mod helper_functions;
mod country_entry;
mod calling_code_owners;
pub mod errors;
pub mod enums;
pub mod country_catalog;

use std::sync::LazyLock;

pub use calling_code_owners::CallingCodeOwners;
pub use country_catalog::CountryCatalog;
pub use country_entry::CountryEntry;
pub use enums::CatalogOrder;
pub use helper_functions::us_first;

use crate::{grammar::PhoneGrammar, i18n::LocaleDatabase};

/// The catalog built from the compiled-in locale table and libphonenumber
/// metadata. Built on first access, read-only afterwards.
pub static COUNTRY_CATALOG: LazyLock<CountryCatalog> = LazyLock::new(|| {
    match CountryCatalog::build(&LocaleDatabase::new(), &PhoneGrammar) {
        Err(err) => {
            let err_message = format!("Could not build compiled-in country catalog: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(catalog) => catalog,
    }
});
