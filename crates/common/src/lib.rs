pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_type_ok() {
        let g = types::Greeting { hello: "world" };
        assert_eq!(g.hello, "world");
    }
}
