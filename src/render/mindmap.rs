//! Freeplane mind map rendering.

use crate::domain::{ScoredRecord, Tier};
use crate::utils::escape_xml;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

const FREEPLANE_VERSION: &str = "freeplane 1.7.0";
const ROOT_COLOR: &str = "#000000";

/// Render the records as a Freeplane `.mm` document: one root node titled
/// `title` and one child per record, coloured by tier.
pub fn render_mindmap(title: &str, records: &[ScoredRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("<map version=\"{FREEPLANE_VERSION}\">\n"));
    out.push_str(&format!(
        "<node TEXT=\"{}\" FOLDED=\"false\" COLOR=\"{ROOT_COLOR}\" LOCALIZED_STYLE_REF=\"AutomaticLayout.level.root\">\n",
        escape_xml(title)
    ));
    for record in records {
        push_record_node(&mut out, record);
    }
    out.push_str("</node>\n</map>\n");
    out
}

fn push_record_node(out: &mut String, scored: &ScoredRecord) {
    out.push_str(&format!(
        "    <node TEXT=\"{}\" POSITION=\"right\" FOLDED=\"false\" COLOR=\"{}\">\n",
        escape_xml(&scored.record.subsystem),
        scored.tier.color()
    ));
    if scored.tier == Tier::AmbiguousAuthor {
        out.push_str("        <font STRIKETHROUGH=\"true\"/>\n");
    }
    out.push_str(&format!(
        "        <richcontent TYPE=\"NOTE\"> <html> <head> </head> <body> <p> Maintainer: {}</p> <p> Stats: {}</p> </body> </html> </richcontent>\n",
        escape_xml(&scored.record.engineer_list()),
        scored.activity_count()
    ));
    out.push_str("    </node>\n");
}

/// Write the mind map to `output`, or to stdout when `output` is `-`.
pub fn write_mindmap(output: &Path, title: &str, records: &[ScoredRecord]) -> Result<()> {
    let document = render_mindmap(title, records);

    if output == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes()).context("Failed writing mind map to stdout")?;
        return stdout.flush().context("Failed writing mind map to stdout");
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }
    std::fs::write(output, document)
        .with_context(|| format!("Failed writing mind map: {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityLevel, OwnershipRecord};
    use similar_asserts::assert_eq;
    use tempfile::TempDir;

    fn scored(subsystem: &str, engineers: &[&str], commits: Option<u64>, tier: Tier) -> ScoredRecord {
        ScoredRecord {
            record: OwnershipRecord {
                subsystem: subsystem.to_string(),
                engineers: engineers.iter().map(|s| s.to_string()).collect(),
                files: vec!["drivers/".to_string()],
            },
            commits,
            tier,
        }
    }

    #[test]
    fn renders_one_node_per_record() {
        let records = vec![
            scored("NET", &["Alice Able"], Some(60), Tier::Computed(ActivityLevel::High)),
            scored("TEE", &["Bob", "Carol"], Some(3), Tier::AmbiguousAuthor),
            scored("OLD", &["Dan"], None, Tier::QueryFailed),
        ];

        let expected = "\
<map version=\"freeplane 1.7.0\">
<node TEXT=\"Linux kernel\" FOLDED=\"false\" COLOR=\"#000000\" LOCALIZED_STYLE_REF=\"AutomaticLayout.level.root\">
    <node TEXT=\"NET\" POSITION=\"right\" FOLDED=\"false\" COLOR=\"#009900\">
        <richcontent TYPE=\"NOTE\"> <html> <head> </head> <body> <p> Maintainer: Alice Able</p> <p> Stats: 60</p> </body> </html> </richcontent>
    </node>
    <node TEXT=\"TEE\" POSITION=\"right\" FOLDED=\"false\" COLOR=\"#3333FF\">
        <font STRIKETHROUGH=\"true\"/>
        <richcontent TYPE=\"NOTE\"> <html> <head> </head> <body> <p> Maintainer: Bob, Carol</p> <p> Stats: 3</p> </body> </html> </richcontent>
    </node>
    <node TEXT=\"OLD\" POSITION=\"right\" FOLDED=\"false\" COLOR=\"#C0C0C0\">
        <richcontent TYPE=\"NOTE\"> <html> <head> </head> <body> <p> Maintainer: Dan</p> <p> Stats: -1</p> </body> </html> </richcontent>
    </node>
</node>
</map>
";
        assert_eq!(render_mindmap("Linux kernel", &records).as_str(), expected);
    }

    #[test]
    fn escapes_subsystem_names() {
        let records =
            vec![scored("I2C & SMBUS <core>", &["Alice"], Some(1), Tier::Computed(ActivityLevel::Low))];
        let doc = render_mindmap("Kernel \"next\"", &records);
        assert!(doc.contains("TEXT=\"I2C &amp; SMBUS &lt;core&gt;\""));
        assert!(doc.contains("TEXT=\"Kernel &quot;next&quot;\""));
    }

    #[test]
    fn empty_map_still_has_root() {
        let doc = render_mindmap("Linux kernel", &[]);
        assert!(doc.starts_with("<map version=\"freeplane 1.7.0\">\n<node TEXT=\"Linux kernel\""));
        assert!(doc.ends_with("</node>\n</map>\n"));
    }

    #[test]
    fn writes_into_nested_directory() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out").join("kernel.mm");
        write_mindmap(&path, "Linux kernel", &[]).expect("write");
        let content = std::fs::read_to_string(path).expect("read");
        assert!(content.contains("Linux kernel"));
    }
}
