use time::OffsetDateTime;

/// Where "now" comes from when evaluating expressions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Read the system clock on every call
    #[default]
    System,
    /// Always the given instant
    Fixed(OffsetDateTime),
}

impl Clock {
    /// The current instant according to this clock
    pub fn now(&self) -> OffsetDateTime {
        match self {
            Self::System => OffsetDateTime::now_utc(),
            Self::Fixed(now) => *now,
        }
    }
}

impl From<OffsetDateTime> for Clock {
    fn from(value: OffsetDateTime) -> Self {
        Self::Fixed(value)
    }
}

impl From<Option<OffsetDateTime>> for Clock {
    fn from(value: Option<OffsetDateTime>) -> Self {
        value.map_or(Self::System, Self::Fixed)
    }
}
