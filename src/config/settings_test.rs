#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;

    #[test]
    fn test_default_settings_load() {
        let settings = Settings::new().expect("default settings should load");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.fetcher.max_text_chars, 5000);
        assert_eq!(settings.inference.default_model, "llama3.1");
        assert!(settings.inference.endpoint.ends_with("/ollama"));
        assert_eq!(settings.inference.timeout_secs, 300);
    }
}
