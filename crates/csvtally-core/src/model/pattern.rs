/// The five fixed input filenames, one per reporting time window, and the
/// naming convention used for their output files.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    ThirtyDays,
    ThreeMonths,
    SixMonths,
    MoreThanSixMonths,
    All,
}

impl Pattern {
    /// Every pattern, in processing order.
    pub const ALL: [Pattern; 5] = [
        Self::ThirtyDays,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::MoreThanSixMonths,
        Self::All,
    ];

    /// Literal filename matched by the collector.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ThirtyDays => "1. Thirty Days.csv",
            Self::ThreeMonths => "2. Three Months.csv",
            Self::SixMonths => "3. Six Months.csv",
            Self::MoreThanSixMonths => "4. More Than Six Months.csv",
            Self::All => "5. All.csv",
        }
    }

    /// Filename without the `.csv` extension.
    pub fn base_name(self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(".csv").unwrap_or(name)
    }

    /// Name of the ranked output file for this pattern.
    pub fn output_file_name(self, naming: OutputNaming) -> String {
        match naming {
            OutputNaming::Final => format!("{}_final.csv", self.base_name()),
            OutputNaming::Plain => format!("{}.csv", self.base_name()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Output filename convention. Fixed for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputNaming {
    /// `<basename>_final.csv`
    #[default]
    Final,
    /// `<basename>.csv`
    Plain,
}
