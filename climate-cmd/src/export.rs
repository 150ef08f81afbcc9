use anyhow::Context;
use climate_views::DashboardData;
use log::info;
use std::path::{Path, PathBuf};

/// Write the download payload to `out_dir/<filename>` and return the path.
pub fn run_export(data: &DashboardData, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let download = data.download();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join(&download.filename);
    std::fs::write(&path, &download.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported {} bytes to {}", download.content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load::load, tests::fixture_args};

    #[test]
    fn writes_the_download_under_its_filename() {
        let data = load(&fixture_args()).unwrap();
        let dir = std::env::temp_dir().join(format!("climate-cmd-export-{}", std::process::id()));
        let path = run_export(&data, &dir).unwrap();

        assert_eq!(path.file_name().unwrap(), "climate_monthly_final.csv");
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, data.download().content);
        assert_eq!(String::from_utf8(written).unwrap().lines().count(), 49);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
