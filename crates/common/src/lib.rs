//! Types and helpers shared by every crate in the notes workspace.

pub mod types;

pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn response_status_serializes_lowercase() {
        let s = serde_json::to_string(&types::ResponseStatus::Fail).unwrap();
        assert_eq!(s, "\"fail\"");
    }
}
