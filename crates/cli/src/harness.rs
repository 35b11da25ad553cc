//! Benchmark batch: every `.txt` dataset in a folder, every selected algorithm.
//!
//! Output sections are flushed per file so a later parse failure keeps the
//! work already done.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use trisweep::gen::{standard_suite, SuiteCfg};
use trisweep::{Algorithm, Dataset};

use crate::provenance::{write_sidecar, Payload};

pub struct RunOpts {
    pub algorithms: Vec<Algorithm>,
    pub repetitions: u32,
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary_csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunParams<'a> {
    algorithms: Vec<&'static str>,
    input: &'a Path,
    files: usize,
    repetitions: u32,
}

/// One `File/Algorithm/Result/Running time` section.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub file: String,
    pub algorithm: Algorithm,
    pub result: u64,
    pub mean_ms: f64,
}

impl Report {
    fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "File: {}", self.file)?;
        writeln!(w, "Algorithm: {}", self.algorithm.name())?;
        writeln!(w, "Result: {}", self.result)?;
        writeln!(w, "Running time: {} ms", self.mean_ms)?;
        writeln!(w)
    }
}

/// Sorted `.txt` files of `dir`; `None` (after reporting on stderr) when there is nothing to run.
fn list_inputs(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    if !dir.is_dir() {
        eprintln!("input folder {} does not exist or is not a directory", dir.display());
        return Ok(None);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            files.push(path);
        }
    }
    if files.is_empty() {
        eprintln!("no .txt files in {}", dir.display());
        return Ok(None);
    }
    files.sort();
    Ok(Some(files))
}

/// One untimed call for the reported count, then `repetitions` timed calls.
fn measure(algo: Algorithm, d: &Dataset, repetitions: u32) -> Result<(u64, f64)> {
    let result = algo.count(&d.points, &d.triangles)?;
    let mut total_ms = 0.0;
    for _ in 0..repetitions {
        let start = Instant::now();
        algo.count(&d.points, &d.triangles)?;
        total_ms += start.elapsed().as_secs_f64() * 1e3;
    }
    Ok((result, total_ms / f64::from(repetitions.max(1))))
}

pub fn run(opts: &RunOpts) -> Result<Vec<Report>> {
    let Some(files) = list_inputs(&opts.input)? else {
        return Ok(Vec::new());
    };
    create_parent(&opts.output)?;
    let out = File::create(&opts.output)
        .with_context(|| format!("creating {}", opts.output.display()))?;
    let mut out = BufWriter::new(out);

    let mut reports = Vec::new();
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let d = Dataset::read(path).with_context(|| format!("reading {}", path.display()))?;
        tracing::info!(
            file = %name,
            points = d.points.len(),
            triangles = d.triangles.len(),
            "dataset"
        );
        for &algo in &opts.algorithms {
            let (result, mean_ms) = measure(algo, &d, opts.repetitions)
                .with_context(|| format!("{algo} on {name}"))?;
            tracing::info!(file = %name, algo = %algo, result, mean_ms, "measured");
            let report = Report {
                file: name.clone(),
                algorithm: algo,
                result,
                mean_ms,
            };
            report.write_to(&mut out)?;
            reports.push(report);
        }
        out.flush()?;
    }

    let params = RunParams {
        algorithms: opts.algorithms.iter().map(|a| a.name()).collect(),
        input: &opts.input,
        files: files.len(),
        repetitions: opts.repetitions,
    };
    let mut payload = Payload::new(serde_json::to_value(&params)?);
    if let Some(csv) = &opts.summary_csv {
        write_summary(csv, &reports)?;
        payload = payload.with_output(csv);
    }
    write_sidecar(&opts.output, payload)?;
    Ok(reports)
}

/// `file,algorithm,result,mean_ms` table of a finished batch.
pub fn write_summary(path: &Path, reports: &[Report]) -> Result<()> {
    let mut df = df!(
        "file" => reports.iter().map(|r| r.file.clone()).collect::<Vec<_>>(),
        "algorithm" => reports.iter().map(|r| r.algorithm.name().to_string()).collect::<Vec<_>>(),
        "result" => reports.iter().map(|r| r.result).collect::<Vec<_>>(),
        "mean_ms" => reports.iter().map(|r| r.mean_ms).collect::<Vec<_>>()
    )?;
    create_parent(path)?;
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut f).finish(&mut df)?;
    tracing::info!(rows = df.height(), path = %path.display(), "summary_csv");
    Ok(())
}

/// Write the generator suite into `out`, one `.txt` per dataset.
pub fn generate(out: &Path, cfg: SuiteCfg) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    let mut written = Vec::new();
    for (name, d) in standard_suite(cfg) {
        let path = out.join(&name);
        let f = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut w = BufWriter::new(f);
        d.write(&mut w)?;
        w.flush()?;
        tracing::info!(
            file = %name,
            points = d.points.len(),
            triangles = d.triangles.len(),
            "generated"
        );
        written.push(path);
    }
    let payload = Payload::new(json!({ "seed": cfg.seed, "shrink": cfg.shrink }));
    write_sidecar(out.join("suite"), payload)?;
    Ok(written)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SMALL: &str = "points: 3\n1 1\n5 5\n2 2\ntriangles: 1\n0 0 4 0 0 4\n";

    fn opts(input: &Path, output: &Path, algorithms: Vec<Algorithm>) -> RunOpts {
        RunOpts {
            algorithms,
            repetitions: 2,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            summary_csv: None,
        }
    }

    #[test]
    fn writes_one_section_per_file_and_algorithm() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("b.txt"), SMALL).unwrap();
        fs::write(input.join("a.txt"), "points: 1\n9 9\ntriangles: 0\n").unwrap();
        fs::write(input.join("notes.md"), "ignored").unwrap();
        let output = dir.path().join("out/result.txt");

        let reports = run(&opts(&input, &output, Algorithm::ALL.to_vec())).unwrap();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[0].file, "a.txt");
        assert!(reports[..3].iter().all(|r| r.result == 0));
        assert!(reports[3..].iter().all(|r| r.file == "b.txt" && r.result == 2));

        let text = fs::read_to_string(&output).unwrap();
        let first: Vec<&str> = text.lines().take(5).collect();
        assert_eq!(first[0], "File: a.txt");
        assert_eq!(first[1], "Algorithm: Brute-Force");
        assert_eq!(first[2], "Result: 0");
        assert!(first[3].starts_with("Running time: ") && first[3].ends_with(" ms"));
        assert_eq!(first[4], "");
        assert_eq!(text.matches("File: ").count(), 6);
        assert!(text.contains("Algorithm: Plane-Sweep\nResult: 2\n"));
        let prov = fs::read(dir.path().join("out/result.provenance.json")).unwrap();
        let prov: serde_json::Value = serde_json::from_slice(&prov).unwrap();
        assert_eq!(prov["params"]["files"], 2);
        assert_eq!(prov["params"]["algorithms"][2], "Plane-Sweep");
    }

    #[test]
    fn missing_or_empty_folder_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("result.txt");
        let missing = dir.path().join("nope");
        assert!(run(&opts(&missing, &output, vec![Algorithm::PlaneSweep]))
            .unwrap()
            .is_empty());
        let empty = dir.path().join("empty");
        fs::create_dir(&empty).unwrap();
        assert!(run(&opts(&empty, &output, vec![Algorithm::PlaneSweep]))
            .unwrap()
            .is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn parse_error_aborts_but_keeps_earlier_sections() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), SMALL).unwrap();
        fs::write(dir.path().join("b.txt"), "points: 2\n1 1\n").unwrap();
        let output = dir.path().join("result.out");

        let err = run(&opts(dir.path(), &output, vec![Algorithm::PlaneSweep])).unwrap_err();
        assert!(format!("{err:#}").contains("b.txt"));
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("File: a.txt\nAlgorithm: Plane-Sweep\nResult: 2\n"));
        assert!(!text.contains("b.txt"));
    }

    #[test]
    fn summary_csv_has_a_row_per_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), SMALL).unwrap();
        let output = dir.path().join("result.txt");
        let csv = dir.path().join("summary.csv");
        let mut o = opts(&input, &output, vec![Algorithm::KdTree, Algorithm::PlaneSweep]);
        o.summary_csv = Some(csv.clone());
        run(&o).unwrap();

        let text = fs::read_to_string(&csv).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("file,algorithm,result,mean_ms"));
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.all(|l| l.starts_with("a.txt,") && l.contains(",2,")));
    }

    #[test]
    fn generated_suite_parses_back() {
        let dir = tempdir().unwrap();
        let written = generate(dir.path(), SuiteCfg { seed: 7, shrink: 200 }).unwrap();
        assert_eq!(written.len(), 14);
        for path in &written {
            let d = Dataset::read(path).unwrap();
            assert!(!d.triangles.is_empty());
        }
        assert!(dir.path().join("suite.provenance.json").exists());
    }
}
