//! RDF vocabulary terms used for profile lookups.

/// FOAF vocabulary (`http://xmlns.com/foaf/0.1/`).
pub mod foaf {
    /// Display name of a person.
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    /// Avatar image of a person.
    pub const IMG: &str = "http://xmlns.com/foaf/0.1/img";
    /// Document-to-person link: the person who made the document.
    pub const MAKER: &str = "http://xmlns.com/foaf/0.1/maker";
    /// Document-to-person link: what the document is primarily about.
    pub const PRIMARY_TOPIC: &str = "http://xmlns.com/foaf/0.1/primaryTopic";
}

/// vCard vocabulary (`http://www.w3.org/2006/vcard/ns#`).
pub mod vcard {
    /// Formatted display name.
    pub const FN: &str = "http://www.w3.org/2006/vcard/ns#fn";
    /// Photo of the contact.
    pub const HAS_PHOTO: &str = "http://www.w3.org/2006/vcard/ns#hasPhoto";
}
