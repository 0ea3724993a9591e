//! Descriptors for Atom-style editors with compiler-flag completion

use serde::Serialize;

use crate::errors::Result;
use crate::ide::flags::MergedFlags;

/// Shape of `.gcc-flags.json` consumed by gcc-backed linter plugins
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GccFlags<'a> {
    exec_path: String,
    gcc_default_c_flags: String,
    gcc_default_cpp_flags: String,
    gcc_error_limit: u32,
    gcc_include_paths: String,
    gcc_suppress_warnings: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    gcc_defines: &'a [String],
}

/// Render the Atom file set: a flat token list and its structured twin
pub fn render(flags: &MergedFlags) -> Result<Vec<(&'static str, String)>> {
    let mut clang_complete = flags.tokens().join("\n");
    clang_complete.push('\n');

    let define_flags = flags
        .defines
        .iter()
        .map(|def| format!("-D{}", def))
        .collect::<Vec<_>>()
        .join(" ");
    let gcc_flags = GccFlags {
        exec_path: flags.gcc_path(),
        gcc_default_c_flags: format!("-fsyntax-only {}", define_flags),
        gcc_default_cpp_flags: format!("-fsyntax-only -std=c++11 {}", define_flags),
        gcc_error_limit: 15,
        gcc_include_paths: flags.includes.join(","),
        gcc_suppress_warnings: false,
        gcc_defines: &flags.defines,
    };
    let mut gcc_flags_json = serde_json::to_string_pretty(&gcc_flags)?;
    gcc_flags_json.push('\n');

    Ok(vec![
        (".clang_complete", clang_complete),
        (".gcc-flags.json", gcc_flags_json),
    ])
}
