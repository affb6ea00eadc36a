mod cli {
    pub use reduxrc::cli::*;
}

mod context {
    pub use reduxrc::context::*;
}

mod error {
    pub use reduxrc::error::*;
}

mod set_under_test {
    #![allow(dead_code)]

    include!("../src/commands/set.rs");

    #[test]
    fn parses_json_values() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("42"), serde_json::json!(42));
        assert_eq!(parse_value(r#"{"a":[1,2]}"#), serde_json::json!({"a": [1, 2]}));
    }

    #[test]
    fn keeps_plain_text_as_string() {
        assert_eq!(parse_value("src/app"), Value::String("src/app".to_string()));
        assert_eq!(parse_value(""), Value::String(String::new()));
    }
}
