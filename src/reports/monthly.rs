//! Month-by-month income and expense series
//!
//! Groups transactions by calendar month for charting. Months come out in
//! ascending order; months with no transactions are simply absent rather
//! than reported as zeros.

use std::collections::BTreeMap;

use crate::models::{Kind, Money, Month, Transaction};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Group `transactions` by month, ascending.
///
/// Feeding this the trailing-year window caps the series at twelve entries.
pub fn monthly_series<'a, I>(transactions: I) -> Vec<MonthlyTotals>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<Month, (Money, Money)> = BTreeMap::new();

    for transaction in transactions {
        let entry = totals
            .entry(transaction.month())
            .or_insert((Money::zero(), Money::zero()));
        match transaction.kind {
            Kind::Income => entry.0 += transaction.amount,
            Kind::Expense => entry.1 += transaction.amount,
        }
    }

    totals
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, Subcategory};
    use crate::reports::window::trailing_rows;
    use chrono::NaiveDate;

    fn transaction(date: (i32, u32, u32), kind: Kind, cents: i64) -> Transaction {
        let subcategory = match kind {
            Kind::Expense => Subcategory::EssentialSpending,
            Kind::Income => Subcategory::RegularSalary,
        };
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "test".to_string(),
            kind,
            subcategory,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_series() {
        assert!(monthly_series([]).is_empty());
    }

    #[test]
    fn test_groups_by_month_ascending() {
        let transactions = vec![
            transaction((2024, 3, 15), Kind::Expense, 120_000),
            transaction((2024, 1, 10), Kind::Income, 500_000),
            transaction((2024, 3, 1), Kind::Income, 500_000),
            transaction((2023, 12, 25), Kind::Expense, 9_900),
        ];

        let series = monthly_series(&transactions);
        let months: Vec<Month> = series.iter().map(|t| t.month).collect();
        assert_eq!(
            months,
            vec![
                Month::new(2023, 12),
                Month::new(2024, 1),
                Month::new(2024, 3),
            ]
        );

        let march = series.last().unwrap();
        assert_eq!(march.income, Money::from_cents(500_000));
        assert_eq!(march.expense, Money::from_cents(120_000));
        assert_eq!(march.net(), Money::from_cents(380_000));
    }

    #[test]
    fn test_trailing_window_caps_series_at_twelve() {
        // One expense in each of fourteen consecutive months
        let mut month = Month::new(2023, 2);
        let mut transactions = Vec::new();
        for _ in 0..14 {
            transactions.push(transaction(
                (month.year(), month.month(), 5),
                Kind::Expense,
                1_000,
            ));
            month = month.next();
        }
        let ledger = Ledger::from_transactions(transactions);

        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let rows = trailing_rows(&ledger, today);
        let series = monthly_series(rows.into_iter().map(|(_, t)| t));

        assert_eq!(series.len(), 12);
        assert_eq!(series.first().unwrap().month, Month::new(2023, 4));
        assert_eq!(series.last().unwrap().month, Month::new(2024, 3));
        assert!(series.windows(2).all(|w| w[0].month < w[1].month));
    }
}
