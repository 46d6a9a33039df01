//! Object identifiers for new project records

use uuid::Uuid;

/// Length of an object id in a `project.pbxproj`
pub const IDENTIFIER_LEN: usize = 24;

/// Generate a new object id: 24 uppercase hex digits taken from a random UUID.
///
/// Nothing checks the id against ids already in the document; a collision
/// is left to probability.
pub fn generate_identifier() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..IDENTIFIER_LEN].to_ascii_uppercase()
}
