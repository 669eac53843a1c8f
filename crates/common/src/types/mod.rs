use serde::Serialize;

/// Payload for the two greeting endpoints (`/` and `/hello`).
#[derive(Serialize, Debug)]
pub struct Greeting {
    pub hello: &'static str,
}
