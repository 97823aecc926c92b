use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummonerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuneId(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MasteryId(i64);

impl Display for SummonerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for RuneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MasteryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SummonerId {
    fn from(value: u64) -> Self {
        SummonerId(value)
    }
}

impl From<i64> for RuneId {
    fn from(value: i64) -> Self {
        RuneId(value)
    }
}

impl From<i64> for MasteryId {
    fn from(value: i64) -> Self {
        MasteryId(value)
    }
}
