//! `PBXBuildFile` records

use regex::escape;

use super::SectionPass;
use crate::config::AnchorSet;
use crate::file_entry::PlannedEntry;

/// Adds one build file record per file, each pointing at that file's reference
#[derive(Debug, Default)]
pub struct BuildFilePass;

impl SectionPass for BuildFilePass {
    fn section(&self) -> &'static str {
        "PBXBuildFile"
    }

    fn anchor_pattern(&self, anchors: &AnchorSet) -> String {
        format!(
            r"{} /\* {} in Sources \*/ = \{{isa = PBXBuildFile;[^}}]*\}};",
            escape(&anchors.build_file_id),
            escape(&anchors.file_name)
        )
    }

    fn render(&self, planned: &PlannedEntry) -> String {
        let name = &planned.entry.name;
        format!(
            "\t\t{} /* {} in Sources */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};",
            planned.ids.build_file, name, planned.ids.file_ref, name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::apply_pass;
    use crate::passes::test_support::*;

    const SECTION: &str = "/* Begin PBXBuildFile section */
\t\t13B07FBC1A68108700A75B9A /* AppDelegate.mm in Resources */ = {isa = PBXBuildFile; fileRef = 13B07FB01A68108700A75B9A /* AppDelegate.mm */; };
\t\tF11748422D0307B40044C1D9 /* AppDelegate.swift in Sources */ = {isa = PBXBuildFile; fileRef = F11748412D0307B40044C1D9 /* AppDelegate.swift */; };
/* End PBXBuildFile section */
";

    #[test]
    fn test_render_references_file_ref() {
        let line = BuildFilePass.render(&objc_manager());
        assert_eq!(
            line,
            "\t\t444444444444444444444444 /* KakaoMapViewManager.m in Sources */ = {isa = PBXBuildFile; fileRef = 333333333333333333333333 /* KakaoMapViewManager.m */; };"
        );
    }

    #[test]
    fn test_inserts_after_app_delegate() {
        let patched = apply_pass(
            &BuildFilePass,
            SECTION,
            &[swift_view(), objc_manager()],
            &AnchorSet::default(),
        )
        .unwrap();

        let lines: Vec<&str> = patched.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[2].contains("/* AppDelegate.swift in Sources */"));
        assert!(lines[3].contains("fileRef = 111111111111111111111111 /* KakaoMapView.swift */"));
        assert!(lines[4].starts_with("\t\t444444444444444444444444 /* KakaoMapViewManager.m in Sources */"));
        assert_eq!(lines[5], "/* End PBXBuildFile section */");
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let content = SECTION.replace("F11748422D0307B40044C1D9", "0000000000000000000000AA");
        let patched =
            apply_pass(&BuildFilePass, &content, &[swift_view()], &AnchorSet::default()).unwrap();
        assert_eq!(patched, content);
    }
}
