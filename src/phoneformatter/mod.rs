mod helper_constants;
mod helper_functions;
mod regexps;
pub mod errors;
pub mod phoneformatter;

use std::sync::LazyLock;

pub use helper_functions::trim_phone;
pub use phoneformatter::{PhoneFormatter, PhoneNumberComponents};
pub(crate) use helper_constants::{DEFAULT_CALLING_CODE, PLUS_SIGN};

pub static PHONE_FORMATTER: LazyLock<PhoneFormatter> = LazyLock::new(|| {
    PhoneFormatter::new()
});
