//! Transaction kinds and the fixed subcategory vocabulary
//!
//! The ledger file stores Portuguese labels (the format predates this
//! implementation); code and UI use the English enum names. Each kind owns a
//! fixed set of subcategories, validated at the store boundary.

use std::fmt;
use std::str::FromStr;

/// Top-level classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Expense,
    Income,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Expense, Kind::Income];

    /// The label this kind serializes to in the ledger file
    pub const fn wire_label(&self) -> &'static str {
        match self {
            Kind::Expense => "Despesa",
            Kind::Income => "Receita",
        }
    }

    /// Parse an on-disk label (exact match)
    pub fn from_wire(s: &str) -> Option<Kind> {
        match s {
            "Despesa" => Some(Kind::Expense),
            "Receita" => Some(Kind::Income),
            _ => None,
        }
    }

    /// The other kind (for toggling in forms)
    pub const fn toggled(&self) -> Kind {
        match self {
            Kind::Expense => Kind::Income,
            Kind::Income => Kind::Expense,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Expense => "Expense",
            Kind::Income => "Income",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "despesa" => Ok(Kind::Expense),
            "income" | "receita" => Ok(Kind::Income),
            other => Err(format!(
                "unknown kind '{}' (expected 'expense' or 'income')",
                other
            )),
        }
    }
}

/// Finer classification of a transaction, constrained by its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcategory {
    // Expense
    EssentialSpending,
    Debts,
    OtherSpending,
    // Income
    RegularSalary,
    SalaryAdvance,
    OtherSource,
}

impl Subcategory {
    pub const ALL: [Subcategory; 6] = [
        Subcategory::EssentialSpending,
        Subcategory::Debts,
        Subcategory::OtherSpending,
        Subcategory::RegularSalary,
        Subcategory::SalaryAdvance,
        Subcategory::OtherSource,
    ];

    /// The subcategories allowed for a kind, in menu order
    pub const fn allowed_for(kind: Kind) -> &'static [Subcategory] {
        match kind {
            Kind::Expense => &[
                Subcategory::EssentialSpending,
                Subcategory::Debts,
                Subcategory::OtherSpending,
            ],
            Kind::Income => &[
                Subcategory::RegularSalary,
                Subcategory::SalaryAdvance,
                Subcategory::OtherSource,
            ],
        }
    }

    /// The kind this subcategory belongs to
    pub const fn kind(&self) -> Kind {
        match self {
            Subcategory::EssentialSpending | Subcategory::Debts | Subcategory::OtherSpending => {
                Kind::Expense
            }
            Subcategory::RegularSalary | Subcategory::SalaryAdvance | Subcategory::OtherSource => {
                Kind::Income
            }
        }
    }

    /// The label this subcategory serializes to in the ledger file
    pub const fn wire_label(&self) -> &'static str {
        match self {
            Subcategory::EssentialSpending => "Gastos Essenciais",
            Subcategory::Debts => "Dívidas",
            Subcategory::OtherSpending => "Outros gastos",
            Subcategory::RegularSalary => "Salário Regular",
            Subcategory::SalaryAdvance => "Adto. Salarial",
            Subcategory::OtherSource => "Outra Fonte",
        }
    }

    /// Parse an on-disk label (exact match)
    pub fn from_wire(s: &str) -> Option<Subcategory> {
        Self::ALL.iter().copied().find(|sub| sub.wire_label() == s)
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Subcategory::EssentialSpending => "Essential spending",
            Subcategory::Debts => "Debts",
            Subcategory::OtherSpending => "Other spending",
            Subcategory::RegularSalary => "Regular salary",
            Subcategory::SalaryAdvance => "Salary advance",
            Subcategory::OtherSource => "Other source",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Subcategory {
    type Err = String;

    /// Accepts the wire labels in any case, plus unaccented ASCII aliases
    /// so shell users never have to type `í` or `á`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gastos essenciais" | "essenciais" | "essential" | "essential-spending" => {
                Ok(Subcategory::EssentialSpending)
            }
            "dívidas" | "dividas" | "debts" => Ok(Subcategory::Debts),
            "outros gastos" | "outros" | "other-spending" => Ok(Subcategory::OtherSpending),
            "salário regular" | "salario" | "salario-regular" | "regular-salary" => {
                Ok(Subcategory::RegularSalary)
            }
            "adto. salarial" | "adto" | "salary-advance" => Ok(Subcategory::SalaryAdvance),
            "outra fonte" | "outra-fonte" | "other-source" => Ok(Subcategory::OtherSource),
            other => Err(format!("unknown subcategory '{}'", other)),
        }
    }
}
