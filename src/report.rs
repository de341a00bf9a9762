use anyhow::{Context, Result};
use hubfee_boundary::Report;
use std::{fs, path::Path};

pub fn write_json_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("Unable to write {}", path.display()))?;
    log::info!("Wrote {} districts to {}", report.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubfee_boundary::DistanceResult;

    #[test]
    fn write_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("distances.json");
        let mut report = Report::new();
        report.insert(
            "Al Rimal".into(),
            DistanceResult {
                km: Some(1.7),
                fee: 15,
            },
        );
        report.insert("Irqah".into(), DistanceResult { km: None, fee: 60 });
        write_json_report(&path, &report).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert_eq!(
            r#"{
  "Al Rimal": {
    "km": 1.7,
    "fee": 15
  },
  "Irqah": {
    "km": null,
    "fee": 60
  }
}"#,
            json
        );
        let read: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report, read);
    }
}
