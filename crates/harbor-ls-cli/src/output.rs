//! Report rendering.

use anyhow::Result;
use harbor_ls_registry::Artifact;
use harbor_ls_scanner::ScanResult;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders a scan result in the requested format.
pub fn render(result: &ScanResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Renders the result as JSON indented by four spaces.
pub fn render_json(result: &ScanResult) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

/// Renders the result as an indented tree.
///
/// Artifacts are listed newest first; artifacts pushed at the same time keep
/// registry order.
pub fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();
    for (project, repos) in result.projects() {
        out.push_str(project);
        out.push('\n');
        for (repo, artifacts) in repos {
            out.push('\t');
            out.push_str(repo);
            out.push('\n');
            for artifact in newest_first(artifacts) {
                out.push_str(&format!(
                    "\t\t{} {} {}\n",
                    artifact.time,
                    artifact.digest,
                    artifact.sorted_tags().join(" ")
                ));
            }
        }
    }
    out
}

fn newest_first(artifacts: &[Artifact]) -> Vec<&Artifact> {
    let mut sorted: Vec<&Artifact> = artifacts.iter().collect();
    sorted.sort_by(|a, b| b.time.cmp(&a.time));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_ls_registry::PushTime;
    use harbor_ls_scanner::ProjectArtifacts;

    fn artifact(time: i64, digest: &str, tags: &[&str]) -> Artifact {
        Artifact::new(
            PushTime::Epoch(time),
            digest,
            tags.iter().map(ToString::to_string).collect(),
        )
    }

    fn sample() -> ScanResult {
        let mut repos = ProjectArtifacts::new();
        repos.insert(
            "r1".to_string(),
            vec![artifact(100, "d1", &["v1"]), artifact(200, "d2", &[])],
        );
        let mut result = ScanResult::new();
        result.insert_project("p1", repos);
        result
    }

    #[test]
    fn test_render_text_sorts_newest_first() {
        let text = render_text(&sample());
        assert_eq!(text, "p1\n\tr1\n\t\t200 d2 \n\t\t100 d1 v1\n");
    }

    #[test]
    fn test_render_text_sorts_tags() {
        let mut repos = ProjectArtifacts::new();
        repos.insert("r".to_string(), vec![artifact(1, "d", &["latest", "1.0", "beta"])]);
        let mut result = ScanResult::new();
        result.insert_project("p", repos);

        assert_eq!(render_text(&result), "p\n\tr\n\t\t1 d 1.0 beta latest\n");
    }

    #[test]
    fn test_render_text_ties_keep_registry_order() {
        let mut repos = ProjectArtifacts::new();
        repos.insert(
            "r".to_string(),
            vec![artifact(5, "first", &[]), artifact(5, "second", &[]), artifact(9, "new", &[])],
        );
        let mut result = ScanResult::new();
        result.insert_project("p", repos);

        let text = render_text(&result);
        let digests: Vec<&str> = text
            .lines()
            .skip(2)
            .map(|line| line.trim().split(' ').nth(1).unwrap())
            .collect();
        assert_eq!(digests, vec!["new", "first", "second"]);
    }

    #[test]
    fn test_render_text_failed_branches() {
        let mut repos = ProjectArtifacts::new();
        repos.insert("denied".to_string(), Vec::new());
        let mut result = ScanResult::new();
        result.insert_project("p", repos);
        result.insert_project("broken", ProjectArtifacts::new());

        assert_eq!(render_text(&result), "p\n\tdenied\nbroken\n");
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&ScanResult::new()), "");
    }

    #[test]
    fn test_render_json_keeps_registry_order_and_indent() {
        let json = render_json(&sample()).unwrap();
        let expected = r#"{
    "p1": {
        "r1": [
            {
                "time": 100,
                "digest": "d1",
                "tags": [
                    "v1"
                ]
            },
            {
                "time": 200,
                "digest": "d2",
                "tags": []
            }
        ]
    }
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render(&ScanResult::new(), OutputFormat::Json).unwrap(), "{}\n");
    }
}
