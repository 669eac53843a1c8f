use rand::{distributions::Alphanumeric, Rng};

/// Length of generated record ids. 62^9 values make in-process collisions
/// vanishingly rare; the collection still re-rolls on a hit.
pub const ID_LEN: usize = 9;

/// Generate a short, URL-safe base62 id.
pub fn generate() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_fixed_length_base62() {
        for _ in 0..100 {
            let id = generate();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn ids_do_not_repeat_in_practice() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
