/// Data rows start with a table delimiter followed by a 20xx year
///
/// Narrow on purpose: the header, separator and footer never match, so they are
/// discarded on every read. Rows dated outside 2000-2099 are not recognized.
pub const DATA_ROW_PREFIX: &str = "| 20";

/// Surrounding whitespace is ignored when matching [`DATA_ROW_PREFIX`]
pub fn is_data_row(line: &str) -> bool {
    line.trim().starts_with(DATA_ROW_PREFIX)
}

/// Data rows of a rolling history file, in file order and kept verbatim
pub fn extract_data_rows(content: &str) -> Vec<String> {
    content.lines().filter(|line| is_data_row(line)).map(str::to_string).collect()
}
