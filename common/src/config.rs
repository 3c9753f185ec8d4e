pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_UNIT: &str = "km";

pub struct Config {
    /// Field separator used when reading distance files.
    pub delimiter: char,
    /// Unit appended to the total weight of a spanning forest.
    pub unit: String,
    /// Quiet level. 1 hides headers and the spinner, 2 also hides warnings.
    pub quiet: u8,
    /// Prints only the totals, not every edge of the forest.
    pub summary_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            unit: DEFAULT_UNIT.to_string(),
            quiet: 0,
            summary_only: false,
        }
    }
}
