//! Session slot naming.

/// Key of the slot holding the serialised current user.
pub const CURRENT_USER_KEY: &str = "currentUser";
