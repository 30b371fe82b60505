use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use arcstr::ArcStr;

/// Single-precision monetary amount.
///
/// The engine deliberately stays on `f32` arithmetic; display rounding is a
/// presentation concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Money(f32);

impl Money {
    pub const ZERO: Self = Self(0.0);

    pub fn from_f32(value: f32) -> Self {
        Self(value)
    }

    pub fn amount(self) -> f32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Even share when this amount is split between `ways` participants.
    pub fn split_between(self, ways: usize) -> Self {
        debug_assert!(ways > 0);
        Self(self.0 / ways as f32)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Participant name, treated as an opaque identifier.
///
/// Names are shared between expense entries, balances, queue entries, and
/// graph edges, so cloning must stay cheap.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Participant(ArcStr);

impl Participant {
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(ArcStr::from(name))
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(ArcStr::from(name))
    }
}

/// One participant's owed portion of an expense.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareEntry {
    pub participant: Participant,
    pub owed: Money,
}

/// A recorded expense with its per-participant split.
///
/// The payer always heads the entry list with an owed amount of zero; each
/// supplied sharer owes `total / (sharers + 1)`, the payer counting as the
/// implicit extra sharer. Entries shift later when settlements are
/// reconciled against historical records.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    description: String,
    total: Money,
    payer: Participant,
    entries: Vec<ShareEntry>,
}

impl ExpenseRecord {
    pub fn split_evenly(
        description: impl Into<String>,
        total: Money,
        payer: Participant,
        sharers: &[Participant],
    ) -> Self {
        let share = total.split_between(sharers.len() + 1);

        let mut entries = Vec::with_capacity(sharers.len() + 1);
        entries.push(ShareEntry {
            participant: payer.clone(),
            owed: Money::ZERO,
        });
        entries.extend(sharers.iter().map(|sharer| ShareEntry {
            participant: sharer.clone(),
            owed: share,
        }));

        Self {
            description: description.into(),
            total,
            payer,
            entries,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn payer(&self) -> &Participant {
        &self.payer
    }

    pub fn entries(&self) -> &[ShareEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ShareEntry] {
        &mut self.entries
    }
}

/// A queued intent for `from` to pay `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSettlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

/// A single debt contribution: the owning node is owed `amount` by `to`.
/// Repeated debts between the same pair stay as separate edges.
#[derive(Clone, Debug, PartialEq)]
pub struct DebtEdge {
    pub to: Participant,
    pub amount: Money,
}

/// Result of asking the queue to process its head entry.
#[derive(Clone, Debug, PartialEq)]
pub enum SettlementOutcome {
    Empty,
    Processed(PendingSettlement),
}
