/// A named range: either a catalog entry or a computed description.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOption {
    /// The beginning of the range, as an expression
    pub from: String,
    /// The end of the range, as an expression
    pub to: String,
    /// The human-readable label
    pub display: String,
    /// Set when the expression was not recognized; `display` is then a verbatim rendering
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub invalid: bool,
    /// An optional grouping hint for pickers
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub section: Option<u32>,
}

impl TimeOption {
    /// Creates a valid option without a section
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            display: display.into(),
            invalid: false,
            section: None,
        }
    }

    /// Whether this option is keyed by exactly the given pair of expressions
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }
}

/// The outcome of describing a shorthand range expression.
///
/// Unrecognized input still carries a best-effort option, so callers always
/// have something to display; the variant is the validity signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextRange {
    /// The expression matched the catalog or the relative-offset grammar
    Valid(TimeOption),
    /// The expression was not understood; the option holds a literal rendering
    Invalid(TimeOption),
}

impl TextRange {
    /// Whether the expression was recognized
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Borrows the described option
    pub fn option(&self) -> &TimeOption {
        match self {
            Self::Valid(option) | Self::Invalid(option) => option,
        }
    }

    /// The label to show for the expression
    pub fn display(&self) -> &str {
        &self.option().display
    }

    /// Unwraps into the option, with `invalid` set to mirror the variant
    pub fn into_option(self) -> TimeOption {
        match self {
            Self::Valid(option) => option,
            Self::Invalid(option) => TimeOption {
                invalid: true,
                ..option
            },
        }
    }
}

impl From<TextRange> for TimeOption {
    fn from(value: TextRange) -> Self {
        value.into_option()
    }
}
