use pivotal_core::{InputLayout, LinearSystem};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// On-disk form of a linear system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    pub matrix: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
    #[serde(default)]
    pub layout: InputLayout,
}

impl SystemFile {
    /// Validate the file contents into a system, honoring `layout`.
    pub fn into_system(self) -> Result<LinearSystem<f64>, Box<dyn Error>> {
        Ok(LinearSystem::from_rows(&self.matrix, &self.rhs, self.layout)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    NoUniqueSolution,
}

/// Serializable outcome of one solve.
///
/// Non-finite values are written as the strings `"NaN"`, `"inf"` and
/// `"-inf"`, since JSON numbers cannot hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub status: SolveStatus,
    #[serde(default, with = "non_finite::option_vec")]
    pub solution: Option<Vec<f64>>,
    #[serde(default, with = "non_finite::option")]
    pub max_residual: Option<f64>,
}

impl SolutionReport {
    pub fn solved(solution: Vec<f64>, max_residual: f64) -> Self {
        SolutionReport {
            status: SolveStatus::Solved,
            solution: Some(solution),
            max_residual: Some(max_residual),
        }
    }

    pub fn no_unique_solution() -> Self {
        SolutionReport {
            status: SolveStatus::NoUniqueSolution,
            solution: None,
            max_residual: None,
        }
    }
}

mod non_finite {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    fn to_repr(v: f64) -> Repr {
        if v.is_finite() {
            Repr::Number(v)
        } else {
            Repr::Text(v.to_string())
        }
    }

    fn from_repr<E: serde::de::Error>(r: Repr) -> Result<f64, E> {
        match r {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => s
                .parse()
                .map_err(|_| E::custom(format!("expected a number, \"NaN\", \"inf\" or \"-inf\", got {:?}", s))),
        }
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
            value.map(to_repr).serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
            Option::<Repr>::deserialize(d)?.map(from_repr).transpose()
        }
    }

    pub mod option_vec {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<Vec<f64>>, s: S) -> Result<S::Ok, S::Error> {
            value
                .as_ref()
                .map(|v| v.iter().copied().map(to_repr).collect::<Vec<_>>())
                .serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<f64>>, D::Error> {
            match Option::<Vec<Repr>>::deserialize(d)? {
                Some(v) => v
                    .into_iter()
                    .map(from_repr::<D::Error>)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Some),
                None => Ok(None),
            }
        }
    }
}

/// Parse a system from a JSON string.
pub fn parse_system_json(json: &str) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let file: SystemFile = serde_json::from_str(json)?;
    file.into_system()
}

/// Read a system from a JSON file of the form
/// `{"matrix": [[..], ..], "rhs": [..], "layout": "dense"}`.
/// `layout` is optional and defaults to `dense`.
pub fn read_system_json<P: AsRef<Path>>(path: P) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let json = fs::read_to_string(path.as_ref())?;
    parse_system_json(&json)
}

/// Save a solution report to a JSON file.
pub fn write_solution_json<P: AsRef<Path>>(
    path: P,
    report: &SolutionReport,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Load a solution report from a JSON file.
pub fn read_solution_json<P: AsRef<Path>>(path: P) -> Result<SolutionReport, Box<dyn Error>> {
    let json = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&json)?)
}
