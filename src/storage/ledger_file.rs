//! CSV ledger persistence
//!
//! The ledger lives in a single CSV file with a fixed Portuguese header:
//!
//! ```text
//! Data,Descrição,Tipo,Subcategoria,Valor
//! 2024-03-15,Rent,Despesa,Gastos Essenciais,1200.00
//! ```
//!
//! `Tipo` and `Subcategoria` carry the wire labels from
//! [`crate::models::category`]; `Valor` is a positive decimal amount and the
//! sign is implied by `Tipo`. Loading is strict: any row that fails to parse
//! aborts the load with an error naming that row.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Kind, Ledger, Money, Subcategory, Transaction};

use super::file_io::write_atomic;

/// Column headers, in file order.
const HEADER: [&str; 5] = ["Data", "Descrição", "Tipo", "Subcategoria", "Valor"];

/// Load a ledger from `path`.
///
/// A missing or empty file yields an empty ledger; anything else must be a
/// well-formed ledger file. Row numbers in errors count data rows from 1,
/// with 0 meaning the header line.
pub fn load<P: AsRef<Path>>(path: P) -> SaldoResult<Ledger> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "ledger file missing, starting empty");
        return Ok(Ledger::new());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| SaldoError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.trim().is_empty() {
        return Ok(Ledger::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SaldoError::parse(0, format!("unreadable header: {}", e)))?;
    check_header(headers)?;

    let mut transactions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|e| SaldoError::parse(row, e.to_string()))?;
        transactions.push(parse_record(row, &record)?);
    }

    debug!(path = %path.display(), rows = transactions.len(), "ledger loaded");
    Ok(Ledger::from_transactions(transactions))
}

/// Save a ledger to `path`, replacing the whole file atomically.
///
/// The header is always written, so an empty ledger produces a one-line
/// file that round-trips back to an empty ledger.
pub fn save<P: AsRef<Path>>(path: P, ledger: &Ledger) -> SaldoResult<()> {
    let path = path.as_ref();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| SaldoError::Write(format!("Failed to encode header: {}", e)))?;

    for transaction in ledger {
        writer
            .write_record([
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.description.clone(),
                transaction.kind.wire_label().to_string(),
                transaction.subcategory.wire_label().to_string(),
                transaction.amount.to_string(),
            ])
            .map_err(|e| SaldoError::Write(format!("Failed to encode row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SaldoError::Write(format!("Failed to flush rows: {}", e)))?;

    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), rows = ledger.len(), "ledger saved");
    Ok(())
}

fn check_header(headers: &StringRecord) -> SaldoResult<()> {
    let matches = headers.len() == HEADER.len()
        && headers.iter().zip(HEADER).all(|(got, want)| got == want);
    if !matches {
        let got: Vec<&str> = headers.iter().collect();
        return Err(SaldoError::parse(
            0,
            format!(
                "unexpected header {:?}, expected {:?}",
                got.join(","),
                HEADER.join(",")
            ),
        ));
    }
    Ok(())
}

fn parse_record(row: usize, record: &StringRecord) -> SaldoResult<Transaction> {
    if record.len() != HEADER.len() {
        return Err(SaldoError::parse(
            row,
            format!("expected {} fields, found {}", HEADER.len(), record.len()),
        ));
    }

    let date = parse_date(record[0].trim())
        .ok_or_else(|| SaldoError::parse(row, format!("invalid date '{}'", &record[0])))?;

    let description = record[1].to_string();

    let kind = Kind::from_wire(record[2].trim())
        .ok_or_else(|| SaldoError::parse(row, format!("unknown type '{}'", &record[2])))?;

    let subcategory = Subcategory::from_wire(record[3].trim())
        .ok_or_else(|| SaldoError::parse(row, format!("unknown subcategory '{}'", &record[3])))?;

    let amount = Money::parse(record[4].trim())
        .map_err(|e| SaldoError::parse(row, format!("invalid amount '{}': {}", &record[4], e)))?;

    let transaction = Transaction::new(date, description, kind, subcategory, amount);
    transaction
        .validate()
        .map_err(|e| SaldoError::parse(row, e.to_string()))?;
    Ok(transaction)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn transaction(
        date: (i32, u32, u32),
        description: &str,
        kind: Kind,
        subcategory: Subcategory,
        cents: i64,
    ) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description.to_string(),
            kind,
            subcategory,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = load(temp_dir.path().join("nonexistent.csv")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_everything() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        let original = Ledger::from_transactions(vec![
            transaction(
                (2024, 3, 15),
                "Rent",
                Kind::Expense,
                Subcategory::EssentialSpending,
                120_000,
            ),
            transaction(
                (2024, 3, 1),
                "Salary, March",
                Kind::Income,
                Subcategory::RegularSalary,
                500_000,
            ),
            transaction(
                (2024, 2, 28),
                "Cartão \"extra\"",
                Kind::Expense,
                Subcategory::Debts,
                5_050,
            ),
        ]);

        save(&path, &original).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_writes_wire_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        let ledger = Ledger::from_transactions(vec![transaction(
            (2024, 3, 15),
            "Rent",
            Kind::Expense,
            Subcategory::EssentialSpending,
            120_000,
        )]);

        save(&path, &ledger).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-15,Rent,Despesa,Gastos Essenciais,1200.00\n"
        );
    }

    #[test]
    fn test_save_empty_ledger_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        save(&path, &Ledger::new()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Data,Descrição,Tipo,Subcategoria,Valor\n");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_bad_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Description,Type,Subcategory,Amount\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SaldoError::Parse { row: 0, .. }));
    }

    #[test]
    fn test_load_names_offending_row() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-15,Rent,Despesa,Gastos Essenciais,1200.00\n\
             2024-03-16,Bad,Despesa,Gastos Essenciais,abc\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SaldoError::Parse { row: 2, .. }));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-15,Rent,Gasto,Gastos Essenciais,1200.00\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("unknown type 'Gasto'"));
    }

    #[test]
    fn test_load_rejects_mismatched_subcategory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-01,Pay,Receita,Gastos Essenciais,5000.00\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SaldoError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_load_rejects_zero_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-15,Nothing,Despesa,Gastos Essenciais,0.00\n",
        )
        .unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_accepts_slash_dates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             15/03/2024,Rent,Despesa,Gastos Essenciais,1200.00\n",
        )
        .unwrap();

        let ledger = load(&path).unwrap();
        assert_eq!(
            ledger.get(0).unwrap().date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_load_rejects_short_row() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Data,Descrição,Tipo,Subcategoria,Valor\n\
             2024-03-15,Rent,Despesa\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("expected 5 fields, found 3"));
    }
}
