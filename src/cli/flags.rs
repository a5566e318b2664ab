#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub strength: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    /// `-s` given, with or without a custom set.
    pub symbols: bool,
    pub custom_symbols: Option<String>,
    /// Kept raw so bounds checking can report non-numeric input.
    pub length: Option<String>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}
