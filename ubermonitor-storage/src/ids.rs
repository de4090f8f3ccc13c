use uuid::Uuid;

/// Draw a random v4 id that `is_taken` does not already claim.
pub(crate) fn fresh_id<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = Uuid::new_v4().to_string();
        if !is_taken(&id) {
            return id;
        }
    }
}
