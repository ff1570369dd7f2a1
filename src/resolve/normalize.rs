//! Maps generated wrapper identifiers back to the schema type they wrap.

/// Prefix of generated request wrapper symbols.
pub const GENERATED_REQUEST_PREFIX: &str = "PacketTypeReq_";
/// Prefix of generated response wrapper symbols.
pub const GENERATED_RESPONSE_PREFIX: &str = "PacketTypeRes_";

/// Strips the generated request/response prefix so a reference to a
/// wrapper symbol resolves to the schema type it wraps. Identifiers
/// without a known prefix pass through unchanged.
pub fn strip_generated_prefix(identifier: &str) -> &str {
    identifier
        .strip_prefix(GENERATED_REQUEST_PREFIX)
        .or_else(|| identifier.strip_prefix(GENERATED_RESPONSE_PREFIX))
        .unwrap_or(identifier)
}
