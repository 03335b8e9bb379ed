use std::path::PathBuf;

/// One local artifact to look for: a file that must exist and, optionally,
/// a substring its text content must contain.
pub struct ArtifactCheck {
    pub label: String,
    pub path: PathBuf,
    pub marker: Option<String>,
}

impl ArtifactCheck {
    pub fn exists(label: &str, path: PathBuf) -> ArtifactCheck {
        ArtifactCheck {
            label: String::from(label),
            path,
            marker: None,
        }
    }

    pub fn contains(label: &str, path: PathBuf, marker: &str) -> ArtifactCheck {
        ArtifactCheck {
            label: String::from(label),
            path,
            marker: Some(String::from(marker)),
        }
    }

    fn matches(&self) -> bool {
        match &self.marker {
            None => self.path.exists(),
            // An unreadable file counts as absent, the probe never fails
            Some(marker) => match std::fs::read_to_string(&self.path) {
                Ok(content) => content.contains(marker.as_str()),
                Err(_) => false,
            },
        }
    }
}

/// Labels of every check that matched, in the order they were declared.
/// Missing files simply yield no label.
pub fn probe_artifacts(checks: &[ArtifactCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|check| check.matches())
        .map(|check| check.label.clone())
        .collect()
}
