use pivotal_core::{InputLayout, LinearSystem};
use std::error::Error;
use std::path::Path;

/// Read a system from CSV. The first row is a header and is skipped; every
/// following row holds the coefficients of one equation with its
/// right-hand side in the last column.
pub fn read_system_csv<P: AsRef<Path>>(
    path: P,
    layout: InputLayout,
) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let rdr = csv::Reader::from_path(path.as_ref())?;
    system_from_reader(rdr, layout)
}

/// Parse a system from CSV text, same format as [`read_system_csv`].
pub fn parse_system_csv(text: &str, layout: InputLayout) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let rdr = csv::Reader::from_reader(text.as_bytes());
    system_from_reader(rdr, layout)
}

fn system_from_reader<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
    layout: InputLayout,
) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let mut rows = Vec::new();
    let mut rhs = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let mut values = Vec::with_capacity(record.len());
        for field in record.iter() {
            let val: f64 = field
                .trim()
                .parse()
                .map_err(|e| format!("row {}: cannot parse {:?}: {}", line, field, e))?;
            values.push(val);
        }
        let b = values
            .pop()
            .ok_or_else(|| format!("row {}: no right-hand side", line))?;
        rows.push(values);
        rhs.push(b);
    }

    Ok(LinearSystem::from_rows(&rows, &rhs, layout)?)
}

/// Write a solution vector as a two-column CSV (`index,value`).
pub fn write_solution_csv<P: AsRef<Path>>(path: P, solution: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(["index", "value"])?;
    for (i, v) in solution.iter().enumerate() {
        wtr.write_record(&[i.to_string(), v.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
