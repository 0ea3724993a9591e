//! Idempotent merge of requested boards into the project configuration

use log::{debug, info};

use crate::boards::BoardLookup;
use crate::config::{ProjectConfig, Section, env_section_name};
use crate::errors::Result;

/// Options influencing newly created sections
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Add `targets = upload` to sections created in this invocation
    pub enable_auto_uploading: bool,
}

/// Merge the requested board identifiers into `config`.
///
/// Duplicates collapse to their first occurrence. Identifiers whose
/// `env:` section already exists are skipped without touching the
/// section, so re-running with the same boards never perturbs a
/// customized configuration. All remaining identifiers are resolved
/// before any section is appended; one unresolvable identifier means the
/// document is not modified at all.
///
/// Returns the number of sections appended. Persisting the document is
/// the caller's responsibility.
pub fn merge_boards(
    config: &mut ProjectConfig,
    lookup: &dyn BoardLookup,
    board_ids: &[String],
    options: MergeOptions,
) -> Result<usize> {
    let mut requested: Vec<&str> = Vec::new();
    for id in board_ids {
        if !requested.contains(&id.as_str()) {
            requested.push(id);
        }
    }

    let mut resolved = Vec::new();
    for id in requested {
        if config.has_section(&env_section_name(id)) {
            debug!("board '{}' already configured, skipping", id);
            continue;
        }
        resolved.push((id, lookup.resolve(id)?));
    }

    let added = resolved.len();
    for (id, record) in resolved {
        let mut section = Section::new(env_section_name(id));
        section.push_option("platform", record.platform.as_str());
        section.push_option("framework", record.default_framework());
        section.push_option("board", id);
        if options.enable_auto_uploading {
            section.push_option("targets", "upload");
        }
        info!("adding environment [{}] ({})", env_section_name(id), record.name);
        config.add_section(section);
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::BoardRegistry;
    use crate::errors::BoardBrewError;

    fn registry() -> &'static BoardRegistry {
        BoardRegistry::bundled()
    }

    #[test]
    fn duplicate_requests_collapse_to_one_section() {
        let mut config = ProjectConfig::new();
        let ids = vec!["uno".to_string(), "uno".to_string()];

        let added = merge_boards(&mut config, registry(), &ids, MergeOptions::default()).unwrap();
        assert_eq!(added, 1);
        assert_eq!(config.len(), 1);
        assert!(config.has_section("env:uno"));
    }

    #[test]
    fn remerging_leaves_existing_sections_untouched() {
        let mut config = ProjectConfig::new();
        let ids = vec!["uno".to_string()];
        merge_boards(&mut config, registry(), &ids, MergeOptions::default()).unwrap();

        // simulate a user customization
        let customized = ProjectConfig::parse(
            "[env:uno]\nplatform = atmelavr\nframework = arduino\nboard = uno\nupload_port = /dev/ttyACM0\n",
        )
        .unwrap();
        let mut config = customized.clone();

        let added = merge_boards(&mut config, registry(), &ids, MergeOptions::default()).unwrap();
        assert_eq!(added, 0);
        assert_eq!(config, customized);
    }

    #[test]
    fn new_section_carries_platform_framework_and_board() {
        let mut config = ProjectConfig::new();
        let ids = vec!["uno".to_string()];
        merge_boards(&mut config, registry(), &ids, MergeOptions::default()).unwrap();

        assert_eq!(
            config.items("env:uno").unwrap(),
            &[
                ("platform".to_string(), "atmelavr".to_string()),
                ("framework".to_string(), "arduino".to_string()),
                ("board".to_string(), "uno".to_string()),
            ]
        );
    }

    #[test]
    fn auto_uploading_adds_the_upload_target() {
        let mut config = ProjectConfig::new();
        let ids = vec!["uno".to_string()];
        let options = MergeOptions {
            enable_auto_uploading: true,
        };
        merge_boards(&mut config, registry(), &ids, options).unwrap();

        let section = config.items("env:uno").unwrap();
        assert!(
            section.contains(&("targets".to_string(), "upload".to_string())),
            "expected targets = upload in {:?}",
            section
        );
    }

    #[test]
    fn one_bad_identifier_aborts_without_appending_anything() {
        let mut config = ProjectConfig::new();
        let ids = vec!["uno".to_string(), "missed_board".to_string()];

        let result = merge_boards(&mut config, registry(), &ids, MergeOptions::default());
        assert!(matches!(result, Err(BoardBrewError::UnknownBoard(id)) if id == "missed_board"));
        assert!(config.is_empty());
    }

    #[test]
    fn zero_requested_boards_is_a_no_op() {
        let mut config = ProjectConfig::parse("[env:uno]\nboard = uno\n").unwrap();
        let snapshot = config.clone();

        let added = merge_boards(&mut config, registry(), &[], MergeOptions::default()).unwrap();
        assert_eq!(added, 0);
        assert_eq!(config, snapshot);
    }

    #[test]
    fn insertion_order_follows_first_occurrence_order() {
        let mut config = ProjectConfig::new();
        let ids = vec![
            "teensy31".to_string(),
            "uno".to_string(),
            "teensy31".to_string(),
        ];
        merge_boards(&mut config, registry(), &ids, MergeOptions::default()).unwrap();

        let names: Vec<&str> = config.sections().map(|s| s.name()).collect();
        assert_eq!(names, ["env:teensy31", "env:uno"]);
    }
}
