#![no_main]

use libfuzzer_sys::fuzz_target;
use std::panic::AssertUnwindSafe;
use xcode_patch::config::AnchorSet;
use xcode_patch::file_entry::{FileEntry, PlannedEntry};
use xcode_patch::patcher::patch_content;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let entries = PlannedEntry::plan(&FileEntry::kakao_map_defaults());
        let anchors = AnchorSet::default();

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            patch_content(content, &entries, &anchors)
        }));

        if let Ok(Ok(patched)) = result {
            assert!(
                patched.len() >= content.len(),
                "patching must never remove text"
            );
            assert!(
                patched.starts_with(content.split("AppDelegate").next().unwrap_or("")),
                "text before the first anchor must be untouched"
            );
        }
    }
});
