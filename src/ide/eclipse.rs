//! Descriptors for Eclipse CDT workspaces

use crate::ide::flags::MergedFlags;

const PROJECT_TEMPLATE: &str = include_str!("templates/project.xml");
const CPROJECT_TEMPLATE: &str = include_str!("templates/cproject.xml");

/// Render the Eclipse file set from the merged build settings
pub fn render(project_name: &str, flags: &MergedFlags) -> Vec<(&'static str, String)> {
    let project = render_template(
        PROJECT_TEMPLATE,
        &[("project_name", xml_escape(project_name))],
    );
    let cproject = render_template(
        CPROJECT_TEMPLATE,
        &[
            ("project_name", xml_escape(project_name)),
            ("path_entries", path_entries(flags)),
        ],
    );

    vec![(".project", project), (".cproject", cproject)]
}

/// CDT pathentry elements for every include path and define, in merged order
fn path_entries(flags: &MergedFlags) -> String {
    let mut entries = Vec::new();
    for include in &flags.includes {
        entries.push(format!(
            "\t\t\t\t<pathentry include=\"{}\" kind=\"inc\" path=\"\" system=\"true\"/>",
            xml_escape(include)
        ));
    }
    for define in &flags.defines {
        let (name, value) = define.split_once('=').unwrap_or((define.as_str(), ""));
        entries.push(format!(
            "\t\t\t\t<pathentry kind=\"mac\" name=\"{}\" path=\"\" value=\"{}\"/>",
            xml_escape(name),
            xml_escape(value)
        ));
    }
    entries.join("\n")
}

fn render_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::BoardRegistry;
    use crate::config::ProjectConfig;
    use crate::ide::flags::merge_flags;

    fn flags_for(ids: &[&str]) -> MergedFlags {
        let mut content = String::new();
        for id in ids {
            content.push_str(&format!("[env:{}]\nboard = {}\n", id, id));
        }
        let config = ProjectConfig::parse(&content).unwrap();
        merge_flags(&config, BoardRegistry::bundled()).unwrap()
    }

    #[test]
    fn project_descriptor_carries_the_project_name() {
        let files = render("blink", &flags_for(&["uno"]));
        let (name, content) = &files[0];
        assert_eq!(*name, ".project");
        assert!(content.contains("<name>blink</name>"));
        assert!(content.contains("org.eclipse.cdt.core.cnature"));
    }

    #[test]
    fn cproject_encodes_includes_and_defines() {
        let files = render("blink", &flags_for(&["uno"]));
        let (name, content) = &files[1];
        assert_eq!(*name, ".cproject");
        assert!(content.contains("framework-arduinoavr/cores/arduino"));
        assert!(content.contains("name=\"F_CPU\" path=\"\" value=\"16000000L\""));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let files = render("a<b>&\"c\"", &flags_for(&["uno"]));
        let (_, content) = &files[0];
        assert!(content.contains("<name>a&lt;b&gt;&amp;&quot;c&quot;</name>"));
    }
}
