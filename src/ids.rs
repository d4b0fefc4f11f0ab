use uuid::Uuid;

/// Fresh opaque identifier for a source or power.
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}
