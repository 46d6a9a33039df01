//! `PBXGroup` children lists

use regex::escape;

use super::SectionPass;
use crate::config::AnchorSet;
use crate::file_entry::PlannedEntry;

/// Lists each file reference in the anchor's group, right after the anchor child.
///
/// The anchor must be the first child of the group.
#[derive(Debug, Default)]
pub struct GroupPass;

impl SectionPass for GroupPass {
    fn section(&self) -> &'static str {
        "PBXGroup"
    }

    fn anchor_pattern(&self, anchors: &AnchorSet) -> String {
        format!(
            r"{} /\* {} \*/ = \{{[^}}]+children = \(\s+{} /\* {} \*/,",
            escape(&anchors.group_id),
            escape(&anchors.group_name),
            escape(&anchors.file_ref_id),
            escape(&anchors.file_name)
        )
    }

    fn render(&self, planned: &PlannedEntry) -> String {
        format!("\t\t\t\t{} /* {} */,", planned.ids.file_ref, planned.entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::apply_pass;
    use crate::passes::test_support::*;

    const SECTION: &str = "/* Begin PBXGroup section */
\t\t13B07FAE1A68108700A75B9A /* Petmily */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tF11748412D0307B40044C1D9 /* AppDelegate.swift */,
\t\t\t\t13B07FB61A68108700A75B9A /* Info.plist */,
\t\t\t);
\t\t\tname = Petmily;
\t\t\tsourceTree = \"<group>\";
\t\t};
/* End PBXGroup section */
";

    #[test]
    fn test_render() {
        assert_eq!(
            GroupPass.render(&swift_view()),
            "\t\t\t\t111111111111111111111111 /* KakaoMapView.swift */,"
        );
    }

    #[test]
    fn test_inserts_after_first_child() {
        let patched = apply_pass(
            &GroupPass,
            SECTION,
            &[swift_view(), objc_manager()],
            &AnchorSet::default(),
        )
        .unwrap();

        let lines: Vec<&str> = patched.lines().collect();
        assert_eq!(lines[4], "\t\t\t\tF11748412D0307B40044C1D9 /* AppDelegate.swift */,");
        assert_eq!(lines[5], "\t\t\t\t111111111111111111111111 /* KakaoMapView.swift */,");
        assert_eq!(lines[6], "\t\t\t\t333333333333333333333333 /* KakaoMapViewManager.m */,");
        assert_eq!(lines[7], "\t\t\t\t13B07FB61A68108700A75B9A /* Info.plist */,");
        assert!(!patched.contains(",,"));
    }

    #[test]
    fn test_other_group_is_untouched() {
        let anchors = AnchorSet {
            group_name: "Libraries".to_string(),
            ..Default::default()
        };
        let patched = apply_pass(&GroupPass, SECTION, &[swift_view()], &anchors).unwrap();
        assert_eq!(patched, SECTION);
    }

    #[test]
    fn test_anchor_not_first_child_is_noop() {
        let content = SECTION.replace(
            "\t\t\t\tF11748412D0307B40044C1D9 /* AppDelegate.swift */,\n\t\t\t\t13B07FB61A68108700A75B9A /* Info.plist */,",
            "\t\t\t\t13B07FB61A68108700A75B9A /* Info.plist */,\n\t\t\t\tF11748412D0307B40044C1D9 /* AppDelegate.swift */,",
        );
        let patched =
            apply_pass(&GroupPass, &content, &[swift_view()], &AnchorSet::default()).unwrap();
        assert_eq!(patched, content);
    }
}
