//! Domain constants

/// Suffix appended to a filename to mark the exported copy as encrypted.
pub const ENCRYPTED_FILE_SUFFIX: &str = ".seald";

/// Filename used by the string round-trip demo payload.
pub const DEMO_FILENAME: &str = "myFilename.ext";

/// Content used by the string round-trip demo payload.
pub const DEMO_CONTENT: &str = "File data as string.";
