//! Sample roster generation for the downloadable upload template.

use std::io::Write;

use rand::Rng;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};
use crate::models::RawRow;

/// Names used for generated roster entries.
pub const SAMPLE_NAMES: [&str; 50] = [
    "Juan Dela Cruz",
    "Maria Clara",
    "Jose Rizal",
    "Andres Bonifacio",
    "Gabriela Silang",
    "Emilio Aguinaldo",
    "Apolinario Mabini",
    "Melchora Aquino",
    "Antonio Luna",
    "Juan Luna",
    "Marcelo del Pilar",
    "Graciano Lopez Jaena",
    "Gregoria de Jesus",
    "Teresa Magbanua",
    "Diego Silang",
    "Lapu-Lapu",
    "Sultan Kudarat",
    "Francisco Dagohoy",
    "Macario Sakay",
    "Gregorio del Pilar",
    "Emilio Jacinto",
    "Trinidad Tecson",
    "Josefa Llanes Escoda",
    "Manuel Quezon",
    "Sergio Osmena",
    "Manuel Roxas",
    "Elpidio Quirino",
    "Ramon Magsaysay",
    "Carlos Garcia",
    "Diosdado Macapagal",
    "Corazon Aquino",
    "Fidel Ramos",
    "Benigno Aquino",
    "Lorenzo Tanada",
    "Claro Recto",
    "Jose Abad Santos",
    "Vicente Lim",
    "Josefa Gabriela",
    "Felipe Agoncillo",
    "Marcela Agoncillo",
    "Pedro Paterno",
    "Mariano Ponce",
    "Jose Palma",
    "Julian Felipe",
    "Leona Florentino",
    "Fernando Amorsolo",
    "Nick Joaquin",
    "Lucio San Pedro",
    "Francisca Reyes Aquino",
    "Carlos Bulosan",
];

/// Lowest generated salary.
pub const MIN_SAMPLE_SALARY: u32 = 20_000;

/// Generated salaries are whole thousands in `[MIN_SAMPLE_SALARY, MIN_SAMPLE_SALARY + 80_000)`.
const SALARY_STEPS: u32 = 80;

/// One line of the upload template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Employee ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Employee name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Monthly basic salary in whole pesos.
    #[serde(rename = "Salary")]
    pub salary: u32,
}

impl RosterEntry {
    /// The entry as an uploaded row would read.
    pub fn to_row(&self) -> RawRow {
        RawRow::new()
            .with("ID", self.id.as_str())
            .with("Name", self.name.as_str())
            .with("Salary", f64::from(self.salary))
    }
}

/// Generates up to `count` roster entries with IDs `EMP001`, `EMP002`, ...
///
/// Each entry takes the next name from [`SAMPLE_NAMES`], so at most 50
/// entries are produced. Salaries are random whole thousands from 20,000
/// up to 99,000.
///
/// # Example
///
/// ```
/// use prominent_payroll::sheet::sample_roster;
///
/// let roster = sample_roster(&mut rand::thread_rng(), 3);
/// assert_eq!(roster[2].id, "EMP003");
/// assert!(roster.iter().all(|e| e.salary >= 20_000 && e.salary % 1000 == 0));
/// ```
pub fn sample_roster<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<RosterEntry> {
    SAMPLE_NAMES
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, name)| RosterEntry {
            id: format!("EMP{:03}", i + 1),
            name: name.to_string(),
            salary: MIN_SAMPLE_SALARY + rng.gen_range(0..SALARY_STEPS) * 1000,
        })
        .collect()
}

/// Writes the roster as CSV with an `ID,Name,Salary` header.
pub fn write_roster_csv<W: Write>(roster: &[RosterEntry], writer: W) -> PayrollResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if roster.is_empty() {
        wtr.write_record(["ID", "Name", "Salary"])
            .map_err(export_error)?;
    }
    for entry in roster {
        wtr.serialize(entry).map_err(export_error)?;
    }
    wtr.flush().map_err(export_error)?;
    Ok(())
}

pub(crate) fn export_error(error: impl std::fmt::Display) -> PayrollError {
    PayrollError::Export {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::read_csv_rows;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_roster_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let roster = sample_roster(&mut rng, 50);

        assert_eq!(roster.len(), 50);
        assert_eq!(roster[0].id, "EMP001");
        assert_eq!(roster[49].id, "EMP050");
        assert_eq!(roster[0].name, "Juan Dela Cruz");
        for entry in &roster {
            assert!((20_000..100_000).contains(&entry.salary));
            assert_eq!(entry.salary % 1000, 0);
        }
    }

    #[test]
    fn test_sample_roster_is_capped_by_name_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_roster(&mut rng, 500).len(), SAMPLE_NAMES.len());
        assert!(sample_roster(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_seeded_roster_is_reproducible() {
        let a = sample_roster(&mut StdRng::seed_from_u64(42), 10);
        let b = sample_roster(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_roster_csv_reads_back_as_rows() {
        let roster = sample_roster(&mut StdRng::seed_from_u64(3), 4);
        let mut buf = Vec::new();
        write_roster_csv(&roster, &mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("ID,Name,Salary\n"));

        let rows = read_csv_rows(buf.as_slice()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1].get("ID").map(|c| c.to_text()),
            Some("EMP002".to_string())
        );
        assert_eq!(
            rows[3].get("Salary").map(|c| c.to_text()),
            Some(roster[3].salary.to_string())
        );
    }

    #[test]
    fn test_empty_roster_still_has_header() {
        let mut buf = Vec::new();
        write_roster_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID,Name,Salary\n");
    }

    #[test]
    fn test_entry_to_row() {
        let entry = RosterEntry {
            id: "EMP009".to_string(),
            name: "Antonio Luna".to_string(),
            salary: 45_000,
        };
        let row = entry.to_row();
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("Salary").map(|c| c.to_text()), Some("45000".to_string()));
    }
}
