use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test mutates the environment concurrently.
unsafe fn clear_llm_env() {
    unsafe {
        std::env::remove_var("LLM_API_KEY_ENV");
        std::env::remove_var("LLM_MODEL");
        std::env::remove_var("LLM_BASE_URL");
        std::env::remove_var("API_KEY");
        std::env::remove_var("GEMINI_API_KEY");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "secret");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "GEMINI_API_KEY");
        std::env::set_var("GEMINI_API_KEY", "g-key");
        std::env::set_var("LLM_MODEL", "gemini-2.5-pro");
        std::env::set_var("LLM_BASE_URL", "https://proxy.example.test/v1beta/");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "g-key");
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.base_url, "https://proxy.example.test/v1beta");

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_missing_key_names_the_variable() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "GEMINI_API_KEY");
    }

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(&err, LlmError::MissingApiKey { var } if var == "GEMINI_API_KEY"));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_blank_key_is_missing() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "   ");
    }

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_blank_model_errors() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_llm_env();
        std::env::set_var("API_KEY", "secret");
        std::env::set_var("LLM_MODEL", "");
    }

    let err = LlmConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("LLM_MODEL"));

    unsafe { clear_llm_env() };
}
