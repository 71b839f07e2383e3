/// Calling code assumed for numbers written without one (North American
/// Numbering Plan).
pub const DEFAULT_CALLING_CODE: u16 = 1;
/// Prefix added to numbers that do not start with a plus sign.
pub const DEFAULT_CALLING_CODE_PREFIX: &'static str = "+1";

pub const PLUS_SIGN: &'static str = "+";

// Shape of a North American number in libphonenumber's international
// format, e.g. "+1 650-253-0000", optionally followed by an extension.
// The area code and the remainder are captured so they can be rewritten
// as "+1 (650) 253-0000".
pub const NANPA_INTERNATIONAL: &'static str = r"(?s)\+1 (\d{3})-(\d{3}-\d{4}.*)";
